pub mod aries_repository;
