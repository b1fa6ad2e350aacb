pub mod network;

pub use network::{EdgeProps, Graph, GammaParams, Stop, TType, TripId};

pub mod error;

pub use error::RouteError;

pub mod utils;

pub use utils::{get_time_str, parse_time, ArrivalTarget, StopQuery};

pub mod delay;

pub use delay::{connection_probability, transfer_penalty, GammaCdfCache};

pub mod timedistance;

pub use timedistance::TimeDistance;

pub mod route;

pub use route::{Route, RouteSummary};

pub mod search;

pub use search::stochastic_search;

pub mod robust;

pub use robust::robust_search;
