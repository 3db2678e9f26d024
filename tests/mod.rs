mod support;
mod dispatcher_tests;
mod scanner_tests;
