pub mod coordinate_check;
