mod error_status_test;
