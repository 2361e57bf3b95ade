use crate::descriptor::ComputeUnitRef;
use serde::Serialize;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

/// Request headers browsers may send on the session calls.
pub const CORS_ALLOWED_REQUEST_HEADERS: [&str; 5] = [
    "Content-Type",
    "X-Amz-Date",
    "Authorization",
    "X-Api-Key",
    "X-Amz-Security-Token",
];

/// Preflight cache duration: one day.
pub const PREFLIGHT_MAX_AGE_SECS: u64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Any,
    Get,
    Post,
    Options,
}

impl HttpMethod {
    fn accepts(&self, method: HttpMethod) -> bool {
        matches!(self, HttpMethod::Any) || *self == method
    }
}

/// Response shape reserved for one status code on a route.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseSpec {
    pub status: u16,
    pub headers: Vec<&'static str>,
}

impl ResponseSpec {
    /// The uniform contract every declared route carries: a 200 with the
    /// content-type and CORS headers always present, plus bodiless 400 and
    /// 500 slots so those status codes are reserved with the gateway.
    fn contract() -> Vec<ResponseSpec> {
        vec![
            ResponseSpec {
                status: 200,
                headers: vec![
                    CONTENT_TYPE,
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    ACCESS_CONTROL_ALLOW_METHODS,
                    ACCESS_CONTROL_ALLOW_HEADERS,
                ],
            },
            ResponseSpec {
                status: 400,
                headers: Vec::new(),
            },
            ResponseSpec {
                status: 500,
                headers: Vec::new(),
            },
        ]
    }
}

/// One routable operation, proxied to the compute unit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    segments: Vec<String>,
    pub method: HttpMethod,
    /// Greedy entries match any otherwise-unrouted path.
    pub greedy: bool,
    pub target: ComputeUnitRef,
    pub responses: Vec<ResponseSpec>,
}

impl RouteEntry {
    fn operation(segments: &[&str], method: HttpMethod, target: &ComputeUnitRef) -> Self {
        Self {
            segments: segments.iter().map(|s| (*s).to_owned()).collect(),
            method,
            greedy: false,
            target: target.clone(),
            responses: ResponseSpec::contract(),
        }
    }

    // The catch-all inherits the gateway's default response behavior, so it
    // declares no contract of its own.
    fn catch_all(target: &ComputeUnitRef) -> Self {
        Self {
            segments: Vec::new(),
            method: HttpMethod::Any,
            greedy: true,
            target: target.clone(),
            responses: Vec::new(),
        }
    }

    pub fn path(&self) -> String {
        if self.greedy {
            "/{proxy+}".to_owned()
        } else if self.segments.is_empty() {
            "/".to_owned()
        } else {
            format!("/{}", self.segments.join("/"))
        }
    }

    pub fn matches(&self, path: &str, method: HttpMethod) -> bool {
        self.method.accepts(method) && (self.greedy || self.path() == path)
    }
}

/// The relay's route set. Paths are unique; lookup always prefers an exact
/// path over the catch-all, so declaration order cannot shadow a named
/// route.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an entry unless its path is already declared.
    pub fn insert(&mut self, entry: RouteEntry) {
        if !self.entries.iter().any(|e| e.path() == entry.path()) {
            self.entries.push(entry);
        }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a request path the way the gateway will: exact-path entries
    /// first, the greedy catch-all only as a fallback.
    pub fn route_for(&self, path: &str, method: HttpMethod) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .filter(|e| !e.greedy)
            .find(|e| e.matches(path, method))
            .or_else(|| self.entries.iter().find(|e| e.greedy && e.matches(path, method)))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Gateway-wide CORS policy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsPolicy {
    pub allow_origins: Vec<&'static str>,
    pub allow_methods: Vec<&'static str>,
    pub allow_headers: Vec<&'static str>,
    pub max_age_secs: u64,
}

impl CorsPolicy {
    /// Any origin, any method, the fixed request-header allow-list, one-day
    /// preflight cache.
    pub fn permissive() -> Self {
        Self {
            allow_origins: vec!["*"],
            allow_methods: vec!["*"],
            allow_headers: CORS_ALLOWED_REQUEST_HEADERS.to_vec(),
            max_age_secs: PREFLIGHT_MAX_AGE_SECS,
        }
    }
}

/// Declares the relay's fixed route set: root (any verb), the three session
/// operations under `/api`, and the greedy catch-all. All proxied to the
/// same compute unit.
pub fn build_routes(target: &ComputeUnitRef) -> RouteTable {
    let mut table = RouteTable::new();
    table.insert(RouteEntry::operation(&[], HttpMethod::Any, target));
    table.insert(RouteEntry::operation(
        &["api", "CreateStreamSession"],
        HttpMethod::Post,
        target,
    ));
    table.insert(RouteEntry::operation(
        &["api", "GetSignalResponse"],
        HttpMethod::Post,
        target,
    ));
    table.insert(RouteEntry::operation(
        &["api", "DestroyStreamSession"],
        HttpMethod::Post,
        target,
    ));
    table.insert(RouteEntry::catch_all(target));
    table
}
