pub mod tapbit;
