mod parser_error_tests;
mod parser_schema_tests;
mod printer_tests;
mod source_tests;
mod utils;
mod visitor_tests;
