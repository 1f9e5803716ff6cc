//! Prompt selection per translate mode.

use crate::lang::is_chinese;
use crate::lang::lang_name;
use crate::mode::TranslateMode;

const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a translation engine that can only translate text and cannot interpret it.";

const POLISHING_SYSTEM_PROMPT: &str =
    "Revise the following sentences to make them more clear, concise, and coherent.";

const SUMMARIZE_SYSTEM_PROMPT: &str =
    "You are a text summarizer, you can only summarize the text, don't interpret it.";

const ANALYZE_SYSTEM_PROMPT: &str = "You are a translation engine and grammar analyzer.";

const EXPLAIN_CODE_SYSTEM_PROMPT: &str = "You are a code explanation engine, you can only explain the code, do not interpret or translate it. Also, please report any bugs you find in the code to the author of the code.";

const TO_TRADITIONAL_PROMPT: &str = "翻譯成台灣常用用法之繁體中文白話文";
const TO_SIMPLIFIED_PROMPT: &str = "翻译成简体白话文";
const SUMMARIZE_ZH_PROMPT: &str = "用最简洁的语言使用中文总结此段文本";
const ANALYZE_ZH_PROMPT: &str =
    "请使用中文解释此段文本并解析原文语法分析，以及分词及词语日文注音，每个词语的来源用法分析";
const EXPLAIN_CODE_ZH_PROMPT: &str = "用最简洁的语言使用中文解释此段代码、正则表达式或脚本。如果内容不是代码，请返回错误提示。如果代码有明显的错误，请指出。";

/// System and instruction prompts sent ahead of the user's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system_prompt: String,
    pub assistant_prompt: String,
}

impl PromptPair {
    /// Pick prompts for `mode` translating from `detect_from` to `detect_to`.
    pub fn for_query(mode: TranslateMode, detect_from: &str, detect_to: &str) -> Self {
        let from_name = lang_name(detect_from);
        let to_name = lang_name(detect_to);
        let from_chinese = is_chinese(detect_from);
        let to_chinese = is_chinese(detect_to);

        let default_assistant = || format!("translate from {from_name} to {to_name}");

        let (system_prompt, assistant_prompt) = match mode {
            TranslateMode::Translate => {
                // Script targets take the vernacular rewrite instruction
                // whatever the source language is.
                let assistant = match detect_to {
                    "zh-Hant" => TO_TRADITIONAL_PROMPT.to_string(),
                    "zh-Hans" => TO_SIMPLIFIED_PROMPT.to_string(),
                    "wyw" | "yue" => format!("翻译成{to_name}"),
                    _ => default_assistant(),
                };
                (DEFAULT_SYSTEM_PROMPT, assistant)
            }
            TranslateMode::Polishing => {
                let assistant = if from_chinese {
                    format!("使用 {from_name} 语言润色此段文本")
                } else {
                    format!("polish this text in {from_name}")
                };
                (POLISHING_SYSTEM_PROMPT, assistant)
            }
            TranslateMode::Summarize => {
                let assistant = if to_chinese {
                    SUMMARIZE_ZH_PROMPT.to_string()
                } else {
                    format!(
                        "summarize this text in the most concise language and must use {to_name} language!"
                    )
                };
                (SUMMARIZE_SYSTEM_PROMPT, assistant)
            }
            TranslateMode::Analyze => {
                let assistant = if to_chinese {
                    ANALYZE_ZH_PROMPT.to_string()
                } else {
                    format!(
                        "translate this text to {to_name} and explain the grammar in the original text using {to_name}"
                    )
                };
                (ANALYZE_SYSTEM_PROMPT, assistant)
            }
            TranslateMode::ExplainCode => {
                let assistant = if to_chinese {
                    EXPLAIN_CODE_ZH_PROMPT.to_string()
                } else {
                    format!(
                        "explain the provided code, regex or script in the most concise language and must use {to_name} language! If the content is not code, return an error message. If the code has obvious errors, point them out."
                    )
                };
                (EXPLAIN_CODE_SYSTEM_PROMPT, assistant)
            }
        };

        Self {
            system_prompt: system_prompt.to_string(),
            assistant_prompt,
        }
    }
}
