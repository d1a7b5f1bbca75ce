use std::fmt;

use serde::Serialize;
use tracing::debug;

/// Logical page names the presentation layer binds components to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteName {
    Home,
    Greeting,
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteName::Home => f.write_str("home"),
            RouteName::Greeting => f.write_str("greeting"),
        }
    }
}

/// One navigable page. Data only: the component bound to each name lives in
/// the presentation layer, looked up via [`RouteTable::entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: RouteName,
    /// Page title for the external "set document title" side effect.
    pub title: &'static str,
}

const ROUTES: [RouteEntry; 2] = [
    RouteEntry {
        path: "/",
        name: RouteName::Home,
        title: "Registration Form",
    },
    RouteEntry {
        path: "/greeting",
        name: RouteName::Greeting,
        title: "Greeting",
    },
];

/// Clean-URL route table anchored at a deployment base path.
///
/// No parameters, nested routes, guards, or redirects; paths outside the two
/// declared entries resolve to `None` and are the outer navigation layer's
/// problem.
#[derive(Debug, Clone)]
pub struct RouteTable {
    base_path: String,
}

impl RouteTable {
    /// `base_path` is where the app is mounted, e.g. "/" or "/app".
    pub fn new(base_path: impl Into<String>) -> Self {
        let mut base_path = base_path.into();
        while base_path.ends_with('/') {
            base_path.pop();
        }
        Self { base_path }
    }

    /// The full declarative table, in declaration order.
    pub fn entries(&self) -> &'static [RouteEntry] {
        &ROUTES
    }

    /// Lookup by logical name. Total: every name has exactly one entry.
    pub fn entry(&self, name: RouteName) -> &'static RouteEntry {
        match name {
            RouteName::Home => &ROUTES[0],
            RouteName::Greeting => &ROUTES[1],
        }
    }

    /// Resolve a request path to its route entry, stripping the base path
    /// first and ignoring a trailing slash.
    pub fn resolve(&self, path: &str) -> Option<&'static RouteEntry> {
        let rest = path.strip_prefix(self.base_path.as_str())?;
        let rest = match rest {
            "" => "/",
            r if r.starts_with('/') => r,
            _ => return None,
        };
        let rest = if rest.len() > 1 {
            rest.trim_end_matches('/')
        } else {
            rest
        };
        let entry = ROUTES.iter().find(|e| e.path == rest);
        debug!(path, resolved = entry.is_some(), "route lookup");
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_declared_paths() {
        let table = RouteTable::new("/");

        let home = table.resolve("/").unwrap();
        assert_eq!(home.name, RouteName::Home);
        assert_eq!(home.title, "Registration Form");

        let greeting = table.resolve("/greeting").unwrap();
        assert_eq!(greeting.name, RouteName::Greeting);
        assert_eq!(greeting.title, "Greeting");
    }

    #[test]
    fn test_unknown_paths_are_unresolved() {
        let table = RouteTable::new("/");
        assert!(table.resolve("/login").is_none());
        assert!(table.resolve("/greeting/extra").is_none());
        assert!(table.resolve("greeting").is_none());
    }

    #[test]
    fn test_resolve_under_base_path() {
        let table = RouteTable::new("/app");
        assert_eq!(table.resolve("/app").unwrap().name, RouteName::Home);
        assert_eq!(table.resolve("/app/").unwrap().name, RouteName::Home);
        assert_eq!(
            table.resolve("/app/greeting").unwrap().name,
            RouteName::Greeting
        );
        // Prefix must end on a path boundary
        assert!(table.resolve("/application").is_none());
        assert!(table.resolve("/greeting").is_none());
    }

    #[test]
    fn test_entry_by_name() {
        let table = RouteTable::new("/");
        assert_eq!(table.entry(RouteName::Home).path, "/");
        assert_eq!(table.entry(RouteName::Greeting).path, "/greeting");
    }

    #[test]
    fn test_table_is_fixed() {
        let table = RouteTable::new("/");
        let entries = table.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            serde_json::to_value(entries[0]).unwrap(),
            serde_json::json!({
                "path": "/",
                "name": "home",
                "title": "Registration Form",
            })
        );
    }
}
