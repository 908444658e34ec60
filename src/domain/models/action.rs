pub enum Action {
    LoadConversation(),
    ResetConversation(),
    SubmitMessage(String),
}
