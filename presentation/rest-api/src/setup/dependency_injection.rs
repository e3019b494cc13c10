use std::sync::Arc;

use anyhow::Context;

use auth::{AuthClient, GoTrueAuthProvider};
use logger::{TracingLogger, TracingNotifier};
use store::{InMemoryCartRepository, SampleOrderRepository, StaticMenuCatalog};

use business::application::auth::get_session::GetSessionUseCaseImpl;
use business::application::auth::session_watcher::SessionWatcher;
use business::application::auth::sign_in::SignInUseCaseImpl;
use business::application::auth::sign_out::SignOutUseCaseImpl;
use business::application::auth::sign_up::SignUpUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::checkout::CheckoutUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::delete::DeleteCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::idle_sweeper::IdleCartSweeper;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::reset::ResetCartUseCaseImpl;
use business::application::menu::browse::BrowseMenuUseCaseImpl;
use business::application::menu::list_outlets::ListOutletsUseCaseImpl;
use business::application::order::get_history::GetOrderHistoryUseCaseImpl;
use business::domain::auth::provider::AuthProvider;

use crate::api::auth::routes::AuthApi;
use crate::api::cart::routes::CartApi;
use crate::api::dashboard::routes::DashboardApi;
use crate::api::health::routes::HealthApi;
use crate::api::menu::routes::MenuApi;
use crate::api::order::routes::OrderApi;
use crate::api::security::JwtVerifier;
use crate::config::app_config::AppConfig;
use crate::config::cart_config::CartConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub menu_api: MenuApi,
    pub cart_api: CartApi,
    pub auth_api: AuthApi,
    pub dashboard_api: DashboardApi,
    pub order_api: OrderApi,
    pub verifier: Arc<JwtVerifier>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let auth = &config.auth;
        let client = AuthClient::new(&auth.url, auth.anon_key.clone(), auth.timeout)
            .context("invalid auth provider configuration")?;
        let provider = Arc::new(GoTrueAuthProvider::new(client));

        Ok(Self::with_provider(provider, &auth.jwt_secret, &config.cart))
    }

    /// Wires every use case around the given auth provider and starts the
    /// session watcher and idle cart sweeper. Must be called inside a tokio
    /// runtime.
    pub fn with_provider(
        provider: Arc<dyn AuthProvider>,
        jwt_secret: &str,
        cart_config: &CartConfig,
    ) -> Self {
        let logger = Arc::new(TracingLogger);
        let notifier = Arc::new(TracingNotifier);
        let verifier = Arc::new(JwtVerifier::new(jwt_secret));

        // Infrastructure adapters
        let catalog = Arc::new(StaticMenuCatalog::new());
        let cart_repository = Arc::new(InMemoryCartRepository::new());
        let order_repository = Arc::new(SampleOrderRepository::new());

        SessionWatcher {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        }
        .spawn(provider.subscribe());

        IdleCartSweeper {
            repository: cart_repository.clone(),
            logger: logger.clone(),
            idle_ttl: cart_config.idle_ttl,
        }
        .spawn(cart_config.sweep_interval);

        // Menu use cases
        let list_outlets_use_case = Arc::new(ListOutletsUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let browse_use_case = Arc::new(BrowseMenuUseCaseImpl {
            catalog: catalog.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let create_cart_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            catalog,
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let reset_use_case = Arc::new(ResetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let delete_cart_use_case = Arc::new(DeleteCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            repository: cart_repository,
            notifier: notifier.clone(),
            logger: logger.clone(),
        });

        // Auth use cases
        let sign_in_use_case = Arc::new(SignInUseCaseImpl {
            provider: provider.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let sign_up_use_case = Arc::new(SignUpUseCaseImpl {
            provider: provider.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let sign_out_use_case = Arc::new(SignOutUseCaseImpl {
            provider: provider.clone(),
            notifier,
            logger: logger.clone(),
        });
        let get_session_use_case = Arc::new(GetSessionUseCaseImpl {
            provider,
            logger: logger.clone(),
        });

        // Order use cases
        let get_history_use_case = Arc::new(GetOrderHistoryUseCaseImpl {
            repository: order_repository,
            logger,
        });

        Self {
            health_api: HealthApi,
            menu_api: MenuApi::new(list_outlets_use_case, browse_use_case),
            cart_api: CartApi::new(
                create_cart_use_case,
                get_cart_use_case,
                add_item_use_case,
                remove_item_use_case,
                reset_use_case,
                delete_cart_use_case,
                checkout_use_case,
                verifier.clone(),
            ),
            auth_api: AuthApi::new(
                sign_in_use_case,
                sign_up_use_case,
                sign_out_use_case,
                get_session_use_case,
            ),
            dashboard_api: DashboardApi::new(verifier.clone()),
            order_api: OrderApi::new(get_history_use_case),
            verifier,
        }
    }
}
