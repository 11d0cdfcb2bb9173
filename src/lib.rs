// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod core {
    pub mod ports;
    pub mod rules;
    pub mod user;
}

pub mod application {
    pub mod errors;
    pub mod registration_service;
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_storage_dao;
        pub mod storage;
    }
}

pub mod shell {
    pub mod config;
    pub mod stdio;
}
