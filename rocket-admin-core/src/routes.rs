/// Which administrative operation a binary triggers on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Delete and regenerate seed data.
    Reseed,
    /// Reconcile backend records against the Truth Ledger.
    Sync,
}

/// Which entity types an operation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityScope {
    Engines,
    LaunchVehicles,
    All,
}

/// One backend endpoint: its request path and the progress line shown
/// while the request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub description: &'static str,
}

impl EntityScope {
    /// Resolve the scope from the two scoping flags.
    ///
    /// `--engines` wins when both flags are given; neither flag means
    /// the operation covers everything.
    pub fn from_flags(engines: bool, vehicles: bool) -> Self {
        if engines {
            EntityScope::Engines
        } else if vehicles {
            EntityScope::LaunchVehicles
        } else {
            EntityScope::All
        }
    }
}

impl Operation {
    /// Short label used in success and failure lines.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Reseed => "Reseed",
            Operation::Sync => "Sync",
        }
    }

    /// Endpoint for this operation at the given scope.
    pub fn route(&self, scope: EntityScope) -> Route {
        match (self, scope) {
            (Operation::Reseed, EntityScope::Engines) => Route {
                path: "/api/sync/reseed/engines",
                description: "Reseeding engines...",
            },
            (Operation::Reseed, EntityScope::LaunchVehicles) => Route {
                path: "/api/sync/reseed/launch-vehicles",
                description: "Reseeding launch vehicles...",
            },
            (Operation::Reseed, EntityScope::All) => Route {
                path: "/api/sync/reseed/all",
                description: "Reseeding all data...",
            },
            (Operation::Sync, EntityScope::Engines) => Route {
                path: "/api/sync/truth-ledger/engines",
                description: "Syncing engines from Truth Ledger...",
            },
            (Operation::Sync, EntityScope::LaunchVehicles) => Route {
                path: "/api/sync/truth-ledger/launch-vehicles",
                description: "Syncing launch vehicles from Truth Ledger...",
            },
            (Operation::Sync, EntityScope::All) => Route {
                path: "/api/sync/truth-ledger/all",
                description: "Syncing all entities from Truth Ledger...",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engines_flag_wins_over_vehicles() {
        assert_eq!(EntityScope::from_flags(true, true), EntityScope::Engines);
        assert_eq!(EntityScope::from_flags(true, false), EntityScope::Engines);
    }

    #[test]
    fn test_no_flags_means_all() {
        assert_eq!(EntityScope::from_flags(false, false), EntityScope::All);
    }

    #[test]
    fn test_vehicles_flag_alone() {
        assert_eq!(
            EntityScope::from_flags(false, true),
            EntityScope::LaunchVehicles
        );
    }

    #[test]
    fn test_reseed_routes() {
        let op = Operation::Reseed;
        assert_eq!(
            op.route(EntityScope::Engines).path,
            "/api/sync/reseed/engines"
        );
        assert_eq!(
            op.route(EntityScope::LaunchVehicles).path,
            "/api/sync/reseed/launch-vehicles"
        );
        assert_eq!(op.route(EntityScope::All).path, "/api/sync/reseed/all");
        assert_eq!(op.route(EntityScope::All).description, "Reseeding all data...");
    }

    #[test]
    fn test_sync_routes() {
        let op = Operation::Sync;
        assert_eq!(
            op.route(EntityScope::Engines).path,
            "/api/sync/truth-ledger/engines"
        );
        assert_eq!(
            op.route(EntityScope::LaunchVehicles).path,
            "/api/sync/truth-ledger/launch-vehicles"
        );
        assert_eq!(op.route(EntityScope::All).path, "/api/sync/truth-ledger/all");
        assert_eq!(
            op.route(EntityScope::Engines).description,
            "Syncing engines from Truth Ledger..."
        );
    }

    #[test]
    fn test_operation_labels() {
        assert_eq!(Operation::Reseed.label(), "Reseed");
        assert_eq!(Operation::Sync.label(), "Sync");
    }
}
