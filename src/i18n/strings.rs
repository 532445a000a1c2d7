use crate::i18n::Language;

/// A canned question offered as a one-tap shortcut in the chat UI.
#[derive(Debug, Clone, Copy)]
pub struct QuickQuestion {
    /// Button label
    pub label: &'static str,

    /// Text sent to the matcher when the button is used
    pub question: &'static str,
}

/// All localized user-facing strings for a language
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    /// Reply used when no intent clears the matching thresholds
    pub fallback: &'static str,

    /// First assistant message shown when a chat starts or is cleared
    pub welcome: &'static str,

    /// Shown when the chat UI cannot reach the API server
    pub connection_error: &'static str,

    /// Shortcuts listed by the chat UI
    pub quick_questions: &'static [QuickQuestion],
}

impl LanguageStrings {
    /// Get the strings for a language.
    pub fn for_language(language: Language) -> &'static LanguageStrings {
        match language.code() {
            "si" => &SINHALA_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

pub static ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    fallback: "I'm sorry, I couldn't find a specific answer to that question. Here are some topics I can help with:\n\n\
• What programs are available?\n\
• Am I eligible for welfare?\n\
• How do I apply?\n\
• What documents are needed?\n\
• Health services information\n\
• Education support\n\
• Financial aid\n\
• How to contact support\n\n\
Please try asking about one of these topics!",

    welcome: "Hello! 👋 I'm the Welfare Services Assistant. I can help you with information about welfare programs, eligibility, applications, and more. What would you like to know?",

    connection_error: "I'm sorry, I'm having trouble connecting to the server. Please make sure the backend is running.",

    quick_questions: &[
        QuickQuestion {
            label: "📋 Available Programs",
            question: "What programs are available?",
        },
        QuickQuestion {
            label: "✅ Eligibility",
            question: "Who is eligible for welfare services?",
        },
        QuickQuestion {
            label: "📝 How to Apply",
            question: "How do I apply for welfare services?",
        },
        QuickQuestion {
            label: "🏥 Health Services",
            question: "What health services are available?",
        },
        QuickQuestion {
            label: "📄 Required Documents",
            question: "What documents are required?",
        },
        QuickQuestion {
            label: "⏱️ Approval Time",
            question: "How long does approval take?",
        },
    ],
};

pub static SINHALA_STRINGS: LanguageStrings = LanguageStrings {
    fallback: "මට සමාවෙන්න, මම එම ප්‍රශ්නයට පිළිතුරු දැනගෙන නැහැ. කරුණාකර වෙනත් ආකාරයකින් අහන්න.",

    welcome: "ආයුබෝවන්! 👋 මම සුබසාධන සේවා සහායකයා. වැඩසටහන්, සුදුසුකම් සහ අයදුම් කිරීම ගැන මගෙන් අහන්න.",

    connection_error: "මට සමාවෙන්න, සේවාදායකයට සම්බන්ධ වීමට නොහැක. කරුණාකර පසුව උත්සාහ කරන්න.",

    quick_questions: &[
        QuickQuestion {
            label: "📋 වැඩසටහන්",
            question: "ඇති වැඩසටහන් මොනවාද?",
        },
        QuickQuestion {
            label: "✅ සුදුසුකම්",
            question: "සුදුසුකම් මොනවාද?",
        },
        QuickQuestion {
            label: "📄 ලේඛන",
            question: "අවශ්‍ය ලේඛන මොනවාද?",
        },
        QuickQuestion {
            label: "🏥 සෞඛ්‍ය",
            question: "සෞඛ්‍ය සේවා මොනවාද?",
        },
    ],
};
