mod bind_tests;
mod concurrency_tests;
mod introspection_tests;
mod query_complexity_tests;
mod subscription_tests;
mod utils;
mod validation_tests;
mod values_tests;
