pub mod dedup_hashed;
pub mod dedup_hashed_by;
pub mod dedup_pairwise;
pub mod dedup_pairwise_by;

pub use dedup_hashed::dedup_hashed;
pub use dedup_hashed_by::dedup_hashed_by;
pub use dedup_pairwise::dedup_pairwise;
pub use dedup_pairwise_by::dedup_pairwise_by;
