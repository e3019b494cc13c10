pub mod application {
    pub mod auth {
        pub mod get_session;
        pub mod session_watcher;
        pub mod sign_in;
        pub mod sign_out;
        pub mod sign_up;
    }
    pub mod cart {
        pub mod add_item;
        pub mod checkout;
        pub mod create;
        pub mod delete;
        pub mod get;
        pub mod idle_sweeper;
        pub mod remove_item;
        pub mod reset;
    }
    pub mod menu {
        pub mod browse;
        pub mod list_outlets;
    }
    pub mod order {
        pub mod get_history;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod provider;
        pub mod viewer;
        pub mod use_cases {
            pub mod get_session;
            pub mod sign_in;
            pub mod sign_out;
            pub mod sign_up;
        }
    }
    pub mod cart {
        pub mod checkout;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod checkout;
            pub mod create;
            pub mod delete;
            pub mod get;
            pub mod remove_item;
            pub mod reset;
        }
    }
    pub mod menu {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod browse;
            pub mod list_outlets;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_history;
        }
    }
}

#[cfg(test)]
pub mod test_support;
