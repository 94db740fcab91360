// Seeding module
//
// Loads the shop dataset from CSV exports into the database.

pub mod csv_seeder;

pub use csv_seeder::{CsvSeeder, SeedSummary};
