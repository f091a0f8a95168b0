//! A fixed, ordered catalog of desktop CPUs with their release year, page-open
//! benchmark score and price.
//!
//! ```
//! let fastest = cpucatalog::catalog::cpus()
//!     .iter()
//!     .max_by_key(|cpu| cpu.open_speed)
//!     .map(|cpu| cpu.name);
//! assert_eq!(fastest, Some("Ryzen 7 7800X3D"));
//! ```

pub mod catalog;

pub mod schemas {
    pub mod computing;
    pub mod money;
}
