// Selection sort, one swap per position.
pub mod selection;

// Recursive quicksort, middle element pivot with crossing Hoare scans.
pub mod quick;
