mod store_factory_test;
