mod mock_fs;

mod toml_tests;
