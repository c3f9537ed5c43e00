pub mod info_writer;
