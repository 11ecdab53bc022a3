mod loader_config_tests;
