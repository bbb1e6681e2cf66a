pub mod helpers;

mod test_signatures;
