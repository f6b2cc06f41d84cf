pub mod info_api;
