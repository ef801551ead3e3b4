mod do_request_tests;
mod extension_tests;
mod request_response_tests;
mod subscribe_tests;
mod utils;
