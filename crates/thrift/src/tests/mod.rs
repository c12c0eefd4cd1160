mod annotations_tests;
mod file_reader_tests;
mod to_json_tests;
mod utils;
