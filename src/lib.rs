
//---------------------------------------
pub mod web_api {
    pub mod routes;
    pub mod controllers;
    pub mod error_handler;
}

pub use web_api::routes::map_routes;
pub use web_api::controllers::*;
pub use web_api::error_handler::AppError;
//---------------------------------------

//---------------------------------------
pub mod shared {
    pub mod models;
    pub mod dto;
}

pub use shared::models::*;
pub use shared::dto::*;
//---------------------------------------

//---------------------------------------
pub mod services {
    pub mod task_service;
}

pub use services::task_service::TaskService;
//---------------------------------------

//---------------------------------------
pub mod validation {
    pub mod schemas;
}
//---------------------------------------

//---------------------------------------
pub mod logging {
    pub mod logger;
    pub mod providers {
        pub mod console;
        pub mod monitoring_api;
    }
}

pub use logging::logger::{ErrorReport, ErrorReporter};
//---------------------------------------

//---------------------------------------
pub mod data_access {
    pub mod data_context;
}

pub use data_access::data_context::DataContext;
//---------------------------------------
