#[derive(Debug, Default, PartialEq, Eq)]
pub enum Translator {
    #[default]
    Google,
    Openai {
        base: String,
        model: String,
        key: String,
    },
}

impl Translator {
    pub fn name(&self) -> &'static str {
        match self {
            Translator::Google => "google",
            Translator::Openai { .. } => "openai",
        }
    }
}
