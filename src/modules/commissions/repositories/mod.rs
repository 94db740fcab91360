mod commission_repository;

pub use commission_repository::CommissionRepository;
