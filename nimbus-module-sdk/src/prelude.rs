//! Everything a module author typically imports, in one place.
//!
//! ```
//! use nimbus_module_sdk::prelude::*;
//! ```

pub use crate::{CustomMethod, FnMethod, ModuleEntry};

pub use crate::nimbus_module_export;

pub use nimbus_types::{
    CastError, CompareOp, Condition, Fields, MethodVerb, ProcessedRequest, PushPayload,
    PushPlatform, PushToken, ResponseBody, ResponseToProcess, ResultFilter, SortDirection,
    SortOrder, UpdateAction, Value, ValueKind,
};

pub use nimbus_services::{
    CacheError, CachingService, ConfigVarError, ConfigVarService, DataError, DataService,
    FacebookError, FacebookService, HttpError, HttpRequest, HttpResponse, HttpService, LogLevel,
    LoggerService, PushError, PushService, ServiceNotActivatedError, ServiceProvider,
    TracingLogger, TwitterError, TwitterService,
};
