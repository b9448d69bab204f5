pub mod data {
    pub mod datasources {
        pub mod paypal_ipn_datasource;
    }
    pub mod models {
        pub mod notify_validate_request_model;
        pub mod validation_response_model;
    }
    pub mod repositories {
        pub mod ipn_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod ipn_endpoint;
        pub mod ipn_notification;
        pub mod ipn_verdict;
    }
    pub mod repositories {
        pub mod ipn_repository;
    }
}

pub mod config;
pub mod errors;
pub mod util;

mod constants;
