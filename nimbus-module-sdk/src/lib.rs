//! SDK for building Nimbus custom code modules.
//!
//! A module exposes named methods the platform routes API calls to. Each
//! method receives the processed request and a per-request
//! [`ServiceProvider`] and answers with a [`ResponseToProcess`]. The
//! platform owns routing, scheduling, and every service implementation; the
//! module owns only its method logic.
//!
//! # Example
//!
//! ```
//! use nimbus_module_sdk::prelude::*;
//!
//! #[derive(Default)]
//! struct HelloModule;
//!
//! struct HelloMethod;
//!
//! impl CustomMethod for HelloMethod {
//!     fn name(&self) -> &str {
//!         "hello"
//!     }
//!
//!     fn params(&self) -> Vec<String> {
//!         vec!["name".into()]
//!     }
//!
//!     fn execute(
//!         &self,
//!         request: &ProcessedRequest,
//!         provider: &dyn ServiceProvider,
//!     ) -> ResponseToProcess {
//!         let who = request.param("name").unwrap_or("world");
//!         provider.logger_service().info(&format!("greeting {who}"));
//!         ResponseToProcess::with_code(200).with("greeting", format!("hello, {who}"))
//!     }
//! }
//!
//! impl ModuleEntry for HelloModule {
//!     fn methods(&self) -> Vec<Box<dyn CustomMethod>> {
//!         vec![Box::new(HelloMethod)]
//!     }
//! }
//!
//! nimbus_module_export!(HelloModule);
//! ```

pub mod prelude;

use nimbus_services::ServiceProvider;
use nimbus_types::{ProcessedRequest, ResponseToProcess};

/// The symbol name the platform loader resolves to construct a module's
/// [`ModuleEntry`]. Emitted by [`nimbus_module_export!`].
pub const MODULE_ENTRY_SYMBOL: &str = "__nimbus_module_entry";

/// One named, callable method within a module.
///
/// The platform routes an API call to the method whose [`name`] matches the
/// resolved method name, then invokes [`execute`] with the processed request
/// and that request's service provider.
///
/// [`name`]: CustomMethod::name
/// [`execute`]: CustomMethod::execute
pub trait CustomMethod: Send + Sync {
    /// The name this method answers to in the API.
    fn name(&self) -> &str;

    /// The query parameters this method accepts. Parameters not listed here
    /// are not forwarded by the platform.
    fn params(&self) -> Vec<String> {
        Vec::new()
    }

    /// Handles one API call.
    fn execute(
        &self,
        request: &ProcessedRequest,
        provider: &dyn ServiceProvider,
    ) -> ResponseToProcess;
}

/// The registration point of a module.
///
/// Exactly one type per module implements this and is named in
/// [`nimbus_module_export!`]. The type must also implement [`Default`]: the
/// platform constructs it with no arguments when the module is loaded.
///
/// Only the method instances returned by [`methods`](ModuleEntry::methods)
/// are reachable through the API; a `CustomMethod` implementation that is
/// never returned here is never routed to.
pub trait ModuleEntry: Send + Sync {
    /// All methods this module exposes.
    fn methods(&self) -> Vec<Box<dyn CustomMethod>>;
}

/// Wraps a closure as a [`CustomMethod`], for methods small enough that a
/// dedicated type is noise.
///
/// ```
/// use nimbus_module_sdk::FnMethod;
/// use nimbus_module_sdk::prelude::*;
///
/// let ping = FnMethod::new("ping", |_request: &ProcessedRequest, _provider: &dyn ServiceProvider| {
///     ResponseToProcess::with_code(200).with("pong", 1i64)
/// });
/// assert_eq!(ping.name(), "ping");
/// ```
pub struct FnMethod<F> {
    name: String,
    params: Vec<String>,
    handler: F,
}

impl<F> FnMethod<F>
where
    F: Fn(&ProcessedRequest, &dyn ServiceProvider) -> ResponseToProcess + Send + Sync,
{
    /// A method with no declared parameters.
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            handler,
        }
    }

    /// A method declaring the query parameters it accepts.
    pub fn with_params(name: impl Into<String>, params: Vec<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            params,
            handler,
        }
    }
}

impl<F> CustomMethod for FnMethod<F>
where
    F: Fn(&ProcessedRequest, &dyn ServiceProvider) -> ResponseToProcess + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn params(&self) -> Vec<String> {
        self.params.clone()
    }

    fn execute(
        &self,
        request: &ProcessedRequest,
        provider: &dyn ServiceProvider,
    ) -> ResponseToProcess {
        (self.handler)(request, provider)
    }
}

/// Declares the module's entry point.
///
/// The named type must implement [`ModuleEntry`] and [`Default`]. The macro
/// emits the well-known constructor symbol ([`MODULE_ENTRY_SYMBOL`]) the
/// platform loader resolves when the module is deployed. A module invokes
/// this exactly once.
#[macro_export]
macro_rules! nimbus_module_export {
    ($entry:ty) => {
        #[doc(hidden)]
        #[unsafe(no_mangle)]
        pub extern "Rust" fn __nimbus_module_entry() -> ::std::boxed::Box<dyn $crate::ModuleEntry>
        {
            ::std::boxed::Box::new(<$entry as ::std::default::Default>::default())
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_services::error::{
        CacheResult, ConfigVarError, DataResult, ServiceNotActivatedError,
    };
    use nimbus_services::{
        CachingService, ConfigVarService, DataError, DataService, FacebookService, HttpService,
        LoggerService, PushService, TracingLogger, TwitterService,
    };
    use nimbus_types::{Condition, Fields, MethodVerb, ResultFilter, UpdateAction, Value};
    use pretty_assertions::assert_eq;
    use std::collections::{BTreeSet, HashMap};

    // ── Provider stub ───────────────────────────────────────────
    // Only the always-available services exist; everything else is
    // inactive, and the datastore answers every call with a backend error.

    struct NoData;

    impl DataService for NoData {
        fn create(&self, _: &str, _: Fields) -> DataResult<Fields> {
            Err(DataError::datastore("no datastore in unit tests"))
        }
        fn read(&self, _: &str, _: &[Condition]) -> DataResult<Vec<Fields>> {
            Err(DataError::datastore("no datastore in unit tests"))
        }
        fn read_filtered(
            &self,
            _: &str,
            _: &[Condition],
            _: &ResultFilter,
        ) -> DataResult<Vec<Fields>> {
            Err(DataError::datastore("no datastore in unit tests"))
        }
        fn update(&self, _: &str, _: &str, _: &[UpdateAction]) -> DataResult<Fields> {
            Err(DataError::datastore("no datastore in unit tests"))
        }
        fn delete(&self, _: &str, _: &str) -> DataResult<bool> {
            Err(DataError::datastore("no datastore in unit tests"))
        }
        fn count(&self, _: &str, _: &[Condition]) -> DataResult<u64> {
            Err(DataError::datastore("no datastore in unit tests"))
        }
        fn add_related(&self, _: &str, _: &Value, _: &str, _: &[Value]) -> DataResult<Fields> {
            Err(DataError::datastore("no datastore in unit tests"))
        }
        fn remove_related(
            &self,
            _: &str,
            _: &Value,
            _: &str,
            _: &[Value],
            _: bool,
        ) -> DataResult<()> {
            Err(DataError::datastore("no datastore in unit tests"))
        }
        fn schema_names(&self) -> DataResult<BTreeSet<String>> {
            Ok(BTreeSet::new())
        }
    }

    struct NoCache;

    impl CachingService for NoCache {
        fn get_bytes(&self, _: &str) -> CacheResult<Option<Vec<u8>>> {
            Ok(None)
        }
        fn set_bytes(&self, _: &str, _: &[u8], _: u64) -> CacheResult<bool> {
            Ok(false)
        }
        fn get_string(&self, _: &str) -> CacheResult<Option<String>> {
            Ok(None)
        }
        fn set_string(&self, _: &str, _: &str, _: u64) -> CacheResult<bool> {
            Ok(false)
        }
        fn delete_eventually(&self, _: &str) -> CacheResult<()> {
            Ok(())
        }
    }

    struct NoConfig;

    impl ConfigVarService for NoConfig {
        fn get(&self, _: &str) -> Result<Option<String>, ConfigVarError> {
            Ok(None)
        }
    }

    struct StubProvider;

    impl ServiceProvider for StubProvider {
        fn data_service(&self) -> &dyn DataService {
            &NoData
        }
        fn caching_service(&self) -> &dyn CachingService {
            &NoCache
        }
        fn config_var_service(&self) -> &dyn ConfigVarService {
            &NoConfig
        }
        fn logger_service(&self) -> &dyn LoggerService {
            &TracingLogger
        }
        fn push_service(&self) -> Result<&dyn PushService, ServiceNotActivatedError> {
            Err(ServiceNotActivatedError::new("push"))
        }
        fn facebook_service(&self) -> Result<&dyn FacebookService, ServiceNotActivatedError> {
            Err(ServiceNotActivatedError::new("facebook"))
        }
        fn twitter_service(&self) -> Result<&dyn TwitterService, ServiceNotActivatedError> {
            Err(ServiceNotActivatedError::new("twitter"))
        }
        fn http_service(&self) -> Result<&dyn HttpService, ServiceNotActivatedError> {
            Err(ServiceNotActivatedError::new("http"))
        }
        fn is_sandbox(&self) -> bool {
            true
        }
        fn module_version(&self) -> &str {
            "0"
        }
    }

    fn request(method: &str, params: HashMap<String, String>) -> ProcessedRequest {
        ProcessedRequest::new(
            MethodVerb::Get,
            format!("https://api.nimbus.example/v1/{method}"),
            method,
            params,
            None,
            "test-app",
            1,
            1,
        )
    }

    // ── CustomMethod ────────────────────────────────────────────

    struct Echo;

    impl CustomMethod for Echo {
        fn name(&self) -> &str {
            "echo"
        }
        fn execute(
            &self,
            request: &ProcessedRequest,
            _provider: &dyn ServiceProvider,
        ) -> ResponseToProcess {
            let text = request.param("text").unwrap_or_default();
            ResponseToProcess::with_code(200).with("echo", text)
        }
    }

    #[test]
    fn params_default_to_empty() {
        assert!(Echo.params().is_empty());
    }

    #[test]
    fn execute_builds_a_response() {
        let mut params = HashMap::new();
        params.insert("text".to_owned(), "marco".to_owned());
        let resp = Echo.execute(&request("echo", params), &StubProvider);
        assert_eq!(resp.code, 200);
        assert_eq!(resp.body["echo"], Value::from("marco"));
    }

    #[test]
    fn methods_reach_provider_services() {
        let probe = FnMethod::new("probe", |_req: &ProcessedRequest, provider: &dyn ServiceProvider| {
            let activated = provider.push_service().is_ok();
            let names = provider.data_service().schema_names().unwrap();
            ResponseToProcess::with_code(200)
                .with("push_activated", i64::from(activated))
                .with("schemas", names.len() as i64)
        });
        let resp = probe.execute(&request("probe", HashMap::new()), &StubProvider);
        assert_eq!(resp.body["push_activated"], Value::Int(0));
        assert_eq!(resp.body["schemas"], Value::Int(0));
    }

    // ── FnMethod ────────────────────────────────────────────────

    #[test]
    fn fn_method_reports_name_and_params() {
        let m = FnMethod::with_params(
            "greet",
            vec!["name".into()],
            |_req: &ProcessedRequest, _provider: &dyn ServiceProvider| {
                ResponseToProcess::with_code(200)
            },
        );
        assert_eq!(m.name(), "greet");
        assert_eq!(m.params(), vec!["name".to_owned()]);
    }

    #[test]
    fn fn_method_boxes_as_custom_method() {
        let boxed: Box<dyn CustomMethod> = Box::new(FnMethod::new(
            "ping",
            |_req: &ProcessedRequest, _provider: &dyn ServiceProvider| {
                ResponseToProcess::with_code(204)
            },
        ));
        let resp = boxed.execute(&request("ping", HashMap::new()), &StubProvider);
        assert_eq!(resp.code, 204);
    }

    // ── ModuleEntry and export macro ────────────────────────────

    #[derive(Default)]
    struct TestModule;

    impl ModuleEntry for TestModule {
        fn methods(&self) -> Vec<Box<dyn CustomMethod>> {
            vec![
                Box::new(Echo),
                Box::new(FnMethod::new(
                    "ping",
                    |_req: &ProcessedRequest, _provider: &dyn ServiceProvider| {
                        ResponseToProcess::with_code(200)
                    },
                )),
            ]
        }
    }

    nimbus_module_export!(TestModule);

    #[test]
    fn module_entry_lists_its_methods_in_order() {
        let names: Vec<String> = TestModule
            .methods()
            .iter()
            .map(|m| m.name().to_owned())
            .collect();
        assert_eq!(names, vec!["echo", "ping"]);
    }

    #[test]
    fn export_macro_constructs_the_entry_via_default() {
        let entry = __nimbus_module_entry();
        assert_eq!(entry.methods().len(), 2);
    }

    #[test]
    fn entry_symbol_matches_the_macro_output() {
        assert_eq!(MODULE_ENTRY_SYMBOL, "__nimbus_module_entry");
    }
}
