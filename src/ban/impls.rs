pub mod ban_list;
pub mod ban_metadata;
pub mod ban_result;
