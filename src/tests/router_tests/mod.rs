mod auth_flow_tests;
mod editor_tests;
mod filter_api_tests;
mod page_tests;
