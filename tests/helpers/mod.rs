pub mod mock_service;
pub mod trait_probe;
