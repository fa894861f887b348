pub mod threaded_executor;
