pub mod activity_summary;
pub mod create_track;
pub mod delete_track;
pub mod get_tracks;
pub mod update_track;
