use super::model::{AuthState, Identity, Role};

/// Presentation-facing view of who is looking at the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Student(Identity),
    Staff(Identity),
    /// Signed in, but without a recognised role claim.
    Member(Identity),
    Unauthenticated,
}

impl From<&AuthState> for Viewer {
    fn from(state: &AuthState) -> Self {
        match state {
            AuthState::Unauthenticated => Viewer::Unauthenticated,
            AuthState::Authenticated(identity) => match identity.role {
                Some(Role::Student) => Viewer::Student(identity.clone()),
                Some(Role::Staff) => Viewer::Staff(identity.clone()),
                None => Viewer::Member(identity.clone()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardAction {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub title: &'static str,
    pub role_label: &'static str,
    pub identity: Option<Identity>,
    pub actions: Vec<DashboardAction>,
}

impl Viewer {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Viewer::Student(identity) | Viewer::Staff(identity) | Viewer::Member(identity) => {
                Some(identity)
            }
            Viewer::Unauthenticated => None,
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        let (title, role_label, actions) = match self {
            Viewer::Student(_) => (
                "Student Dashboard",
                "Student",
                vec![
                    DashboardAction {
                        title: "Place an Order",
                        description: "Browse the menu and place your food orders",
                    },
                    DashboardAction {
                        title: "Order History",
                        description: "View your past orders and track current orders",
                    },
                ],
            ),
            Viewer::Staff(_) => (
                "Staff Dashboard",
                "Staff",
                vec![
                    DashboardAction {
                        title: "Manage Orders",
                        description: "View and update order status",
                    },
                    DashboardAction {
                        title: "Manage Menu",
                        description: "Update food items and categories",
                    },
                ],
            ),
            Viewer::Member(_) => ("Dashboard", "User", vec![]),
            Viewer::Unauthenticated => ("Not Authenticated", "Guest", vec![]),
        };

        Dashboard {
            title,
            role_label,
            identity: self.identity().cloned(),
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;

    #[test]
    fn should_map_role_claims_to_viewer() {
        let student = Identity::new(UserId::new("s-1")).with_role(Role::Student);
        let staff = Identity::new(UserId::new("t-1")).with_role(Role::Staff);
        let member = Identity::new(UserId::new("m-1"));

        assert!(matches!(
            Viewer::from(&AuthState::Authenticated(student)),
            Viewer::Student(_)
        ));
        assert!(matches!(
            Viewer::from(&AuthState::Authenticated(staff)),
            Viewer::Staff(_)
        ));
        assert!(matches!(
            Viewer::from(&AuthState::Authenticated(member)),
            Viewer::Member(_)
        ));
        assert_eq!(Viewer::from(&AuthState::Unauthenticated), Viewer::Unauthenticated);
    }

    #[test]
    fn should_offer_ordering_actions_to_students() {
        let viewer = Viewer::Student(Identity::new(UserId::new("s-1")));

        let dashboard = viewer.dashboard();

        assert_eq!(dashboard.title, "Student Dashboard");
        let titles: Vec<&str> = dashboard.actions.iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Place an Order", "Order History"]);
    }

    #[test]
    fn should_offer_management_actions_to_staff() {
        let viewer = Viewer::Staff(Identity::new(UserId::new("t-1")));

        let dashboard = viewer.dashboard();

        assert_eq!(dashboard.role_label, "Staff");
        assert_eq!(dashboard.actions[0].title, "Manage Orders");
    }

    #[test]
    fn should_show_generic_dashboard_without_role() {
        let dashboard = Viewer::Member(Identity::new(UserId::new("m-1"))).dashboard();

        assert_eq!(dashboard.title, "Dashboard");
        assert_eq!(dashboard.role_label, "User");
        assert!(dashboard.actions.is_empty());
    }

    #[test]
    fn should_have_no_identity_when_unauthenticated() {
        let dashboard = Viewer::Unauthenticated.dashboard();

        assert!(dashboard.identity.is_none());
    }
}
