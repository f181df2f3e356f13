// Bubble sort, with early exit once a scan swaps nothing.
pub mod bubble;

// Straight insertion sort, swapping the new element down into the sorted prefix.
pub mod insertion;

// Bottom-up merge sort, doubling the run width each pass and copying back from a scratch buffer.
pub mod merge;
