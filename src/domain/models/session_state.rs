#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingResponse,
}
