pub mod structured_json;
pub mod fragment_rescue;
pub mod text_heuristics;
