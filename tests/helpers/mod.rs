
pub use test_postgres::TestPostgres;
pub use wav::{MP3_FRAME_HEADER, build_wav};
