//! OpenAI-compatible provider presets.
//!
//! Every preset speaks the chat-completions protocol at
//! `{base}/v1/chat/completions`, so base URLs here stop before `/v1`.

use std::str::FromStr;

/// Provider identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderId {
    #[default]
    OpenAI,
    DeepSeek,
    Moonshot,
    OpenRouter,
    TogetherAI,
    SiliconFlow,
    Ollama,
}

impl ProviderId {
    pub const ALL: &'static [Self] = &[
        Self::OpenAI,
        Self::DeepSeek,
        Self::Moonshot,
        Self::OpenRouter,
        Self::TogetherAI,
        Self::SiliconFlow,
        Self::Ollama,
    ];

    pub fn definition(self) -> &'static ProviderDef {
        match self {
            Self::OpenAI => &OPENAI,
            Self::DeepSeek => &DEEPSEEK,
            Self::Moonshot => &MOONSHOT,
            Self::OpenRouter => &OPENROUTER,
            Self::TogetherAI => &TOGETHERAI,
            Self::SiliconFlow => &SILICONFLOW,
            Self::Ollama => &OLLAMA,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::DeepSeek => "deepseek",
            Self::Moonshot => "moonshot",
            Self::OpenRouter => "openrouter",
            Self::TogetherAI => "togetherai",
            Self::SiliconFlow => "siliconflow",
            Self::Ollama => "ollama",
        }
    }
}

impl FromStr for ProviderId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "deepseek" => Ok(Self::DeepSeek),
            "moonshot" | "kimi" => Ok(Self::Moonshot),
            "openrouter" => Ok(Self::OpenRouter),
            "togetherai" | "together" => Ok(Self::TogetherAI),
            "siliconflow" => Ok(Self::SiliconFlow),
            "ollama" => Ok(Self::Ollama),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.definition().name)
    }
}

/// Provider definition with default configuration.
#[derive(Debug)]
pub struct ProviderDef {
    /// Display name.
    pub name: &'static str,
    /// Default API base, without the `/v1` suffix.
    pub default_api_url: &'static str,
    pub default_model: &'static str,
    pub requires_api_key: bool,
}

static OPENAI: ProviderDef = ProviderDef {
    name: "OpenAI",
    default_api_url: "https://api.openai.com",
    default_model: "gpt-3.5-turbo",
    requires_api_key: true,
};

static DEEPSEEK: ProviderDef = ProviderDef {
    name: "DeepSeek",
    default_api_url: "https://api.deepseek.com",
    default_model: "deepseek-chat",
    requires_api_key: true,
};

static MOONSHOT: ProviderDef = ProviderDef {
    name: "Moonshot",
    default_api_url: "https://api.moonshot.cn",
    default_model: "moonshot-v1-8k",
    requires_api_key: true,
};

static OPENROUTER: ProviderDef = ProviderDef {
    name: "OpenRouter",
    default_api_url: "https://openrouter.ai/api",
    default_model: "openai/gpt-3.5-turbo",
    requires_api_key: true,
};

static TOGETHERAI: ProviderDef = ProviderDef {
    name: "TogetherAI",
    default_api_url: "https://api.together.xyz",
    default_model: "meta-llama/Llama-3-8b-chat-hf",
    requires_api_key: true,
};

static SILICONFLOW: ProviderDef = ProviderDef {
    name: "SiliconFlow",
    default_api_url: "https://api.siliconflow.cn",
    default_model: "Qwen/Qwen2.5-7B-Instruct",
    requires_api_key: true,
};

static OLLAMA: ProviderDef = ProviderDef {
    name: "Ollama",
    default_api_url: "http://localhost:11434",
    default_model: "llama3",
    requires_api_key: false,
};
