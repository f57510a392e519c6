pub mod counting_sort;
