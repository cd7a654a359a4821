//! User-facing strings for each supported language.

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    /// Names accepted in config files and on the command line.
    pub const NAMES: &'static [&'static str] = &["en", "pt-br"];

    /// Parse a locale name (case-insensitive, `_` or `-` separator).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" | "english" => Some(Self::En),
            "pt" | "pt-br" | "portuguese" => Some(Self::PtBr),
            _ => None,
        }
    }

    /// Canonical name of the locale.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::PtBr => "pt-br",
        }
    }

    /// The string table for this locale.
    #[must_use]
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::PtBr => &PT_BR,
        }
    }
}

/// Static string table.
#[derive(Debug)]
pub struct Strings {
    pub list_title: &'static str,
    pub loading: &'static str,
    /// Fixed message shown for any fetch failure
    pub fetch_error: &'static str,
    pub retry_hint: &'static str,
    pub refreshing: &'static str,
    pub empty_list: &'static str,
    pub avatar: &'static str,
    pub username: &'static str,
    pub gender: &'static str,
    pub date_of_birth: &'static str,
    pub phone_number: &'static str,
    pub age: &'static str,
    pub back: &'static str,
    pub hint_move: &'static str,
    pub hint_page: &'static str,
    pub hint_first_last: &'static str,
    pub hint_wheel_top: &'static str,
    pub hint_open: &'static str,
    pub hint_refresh: &'static str,
    pub hint_back: &'static str,
    pub hint_theme: &'static str,
    pub hint_help: &'static str,
    pub hint_quit: &'static str,
}

static EN: Strings = Strings {
    list_title: "Random Users",
    loading: "Loading users…",
    fetch_error: "Could not load users",
    retry_hint: "Press r to try again",
    refreshing: "refreshing…",
    empty_list: "No users returned",
    avatar: "Avatar",
    username: "Username",
    gender: "Gender",
    date_of_birth: "Date of birth",
    phone_number: "Phone",
    age: "age",
    back: "Back",
    hint_move: "move",
    hint_page: "page",
    hint_first_last: "first / last",
    hint_wheel_top: "wheel ↑ at top",
    hint_open: "open",
    hint_refresh: "refresh",
    hint_back: "back",
    hint_theme: "theme",
    hint_help: "help",
    hint_quit: "quit",
};

static PT_BR: Strings = Strings {
    list_title: "Usuários Aleatórios",
    loading: "Carregando usuários…",
    fetch_error: "Erro ao buscar usuários",
    retry_hint: "Pressione r para tentar novamente",
    refreshing: "atualizando…",
    empty_list: "Nenhum usuário retornado",
    avatar: "Avatar",
    username: "Username",
    gender: "Gênero",
    date_of_birth: "Data de Nascimento",
    phone_number: "Telefone",
    age: "idade",
    back: "Voltar",
    hint_move: "mover",
    hint_page: "página",
    hint_first_last: "primeiro / último",
    hint_wheel_top: "roda ↑ no topo",
    hint_open: "abrir",
    hint_refresh: "atualizar",
    hint_back: "voltar",
    hint_theme: "tema",
    hint_help: "ajuda",
    hint_quit: "sair",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Locale::from_name("EN"), Some(Locale::En));
        assert_eq!(Locale::from_name("pt_BR"), Some(Locale::PtBr));
        assert_eq!(Locale::from_name("pt"), Some(Locale::PtBr));
        assert_eq!(Locale::from_name("fr"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for name in Locale::NAMES {
            let locale = Locale::from_name(name).unwrap();
            assert_eq!(locale.name(), *name);
        }
    }

    #[test]
    fn test_portuguese_table() {
        let strings = Locale::PtBr.strings();
        assert_eq!(strings.fetch_error, "Erro ao buscar usuários");
        assert_eq!(strings.back, "Voltar");
        assert_eq!(strings.hint_first_last, "primeiro / último");
    }
}
