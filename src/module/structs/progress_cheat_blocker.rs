use crate::config::structs::progress_cheat_blocker_config::ProgressCheatBlockerConfig;
use crate::module::structs::progress_recorder::ProgressRecorder;

pub struct ProgressCheatBlocker {
    pub(crate) config: ProgressCheatBlockerConfig,
    pub(crate) progress_recorder: ProgressRecorder,
}
