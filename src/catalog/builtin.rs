//! Built-in chatbot tables for the welfare services portal.
//!
//! Intents are listed in matching order: on equal scores the earlier intent
//! wins, so keep specific intents ahead of generic ones when adding entries.

/// One intent row of a built-in table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuiltinIntent {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

pub(crate) static ENGLISH_INTENTS: &[BuiltinIntent] = &[
    BuiltinIntent {
        name: "greeting",
        triggers: &[
            "hello",
            "hi",
            "hey",
            "hii",
            "hiii",
            "helo",
            "hellow",
            "greetings",
            "howdy",
            "sup",
            "yo",
        ],
        response: "Hello! 👋 I'm the Welfare Services Assistant. How can I help you today?",
    },
    BuiltinIntent {
        name: "greeting_morning",
        triggers: &["good morning", "morning"],
        response: "Good morning! ☀️ I'm here to help you with welfare services. What would you like to know?",
    },
    BuiltinIntent {
        name: "greeting_afternoon",
        triggers: &["good afternoon", "afternoon"],
        response: "Good afternoon! 🌤️ How can I assist you today?",
    },
    BuiltinIntent {
        name: "greeting_evening",
        triggers: &["good evening", "evening", "good night"],
        response: "Good evening! 🌙 I'm here to help. What can I do for you?",
    },
    BuiltinIntent {
        name: "how_are_you",
        triggers: &[
            "how are you",
            "how r u",
            "how are u",
            "hows it going",
            "how is it going",
            "whats up",
            "what's up",
            "how do you do",
            "are you ok",
            "are you good",
            "you good",
            "how u doing",
        ],
        response: "I'm doing great, thank you for asking! 😊 I'm here and ready to help you with any questions about welfare services. How can I assist you?",
    },
    BuiltinIntent {
        name: "who_are_you",
        triggers: &[
            "who are you",
            "what are you",
            "are you a bot",
            "are you human",
            "are you real",
            "are you ai",
            "bot or human",
            "who r u",
        ],
        response: "I'm the Welfare Services Assistant, a chatbot designed to help you with information about government welfare programs in Sri Lanka. I can answer questions about eligibility, how to apply, health services, education support, and more!",
    },
    BuiltinIntent {
        name: "what_can_you_do",
        triggers: &[
            "what can you do",
            "what do you do",
            "how can you help",
            "what can you help with",
            "your capabilities",
            "what are your features",
            "help me",
        ],
        response: "I can help you with:\n\n📋 Information about welfare programs\n✅ Checking eligibility requirements\n📝 How to apply for services\n📄 Required documents\n🏥 Health services information\n📚 Education support\n💰 Financial aid programs\n📊 Application status\n\nJust ask me anything!",
    },
    BuiltinIntent {
        name: "thanks",
        triggers: &["thank", "thanks", "thank you", "appreciate", "grateful", "thx"],
        response: "You're welcome! 😊 Is there anything else I can help you with?",
    },
    BuiltinIntent {
        name: "bye",
        triggers: &["bye", "goodbye", "see you", "exit", "quit", "close", "end"],
        response: "Goodbye! 👋 Thank you for chatting with me. Take care and feel free to come back anytime!",
    },
    BuiltinIntent {
        name: "ok",
        triggers: &["ok", "okay", "k", "kk", "got it", "understood", "i see", "alright", "right"],
        response: "Great! 👍 Let me know if you have any other questions.",
    },
    BuiltinIntent {
        name: "yes",
        triggers: &["yes", "yeah", "yep", "yup", "sure", "of course", "definitely", "certainly"],
        response: "Alright! What would you like to know more about?",
    },
    BuiltinIntent {
        name: "no",
        triggers: &[
            "no",
            "nope",
            "nah",
            "not really",
            "no thanks",
            "no thank you",
            "that's all",
            "nothing",
        ],
        response: "Okay, no problem! If you need help later, just ask. 😊",
    },
    BuiltinIntent {
        name: "help",
        triggers: &[
            "help",
            "assist",
            "support me",
            "i need help",
            "can you help",
            "need assistance",
        ],
        response: "I'm here to help! You can ask me about:\n\n• Available welfare programs\n• Eligibility requirements\n• How to apply\n• Required documents\n• Health services\n• Education support\n• Financial aid\n• Application status\n\nWhat would you like to know?",
    },
    BuiltinIntent {
        name: "name",
        triggers: &[
            "your name",
            "whats your name",
            "what's your name",
            "who is this",
            "name please",
        ],
        response: "I'm the Welfare Services Assistant! 🤖 You can call me your friendly welfare helper. I'm here to assist you with information about government welfare programs in Sri Lanka.",
    },
    BuiltinIntent {
        name: "programs_available",
        triggers: &[
            "programs",
            "available",
            "welfare",
            "services",
            "what programs",
            "which programs",
            "what services",
            "offer",
            "provide",
            "list programs",
            "show programs",
            "all services",
        ],
        response: "Our platform offers several welfare programs:\n\n🏥 **Health Services** - Free medical consultations, subsidized medications, hospital treatment coverage\n\n📚 **Education Support** - Scholarships, free textbooks, tutorial classes, higher education assistance\n\n💰 **Financial Aid** - Monthly allowances, emergency funds, livelihood support\n\n📈 **Investment Recommender** - Financial planning and investment guidance\n\n👴 **Senior Care** - Elderly support services and pension assistance",
    },
    BuiltinIntent {
        name: "eligibility",
        triggers: &[
            "eligible",
            "eligibility",
            "who can apply",
            "qualify",
            "am i eligible",
            "can i apply",
            "requirements",
            "do i qualify",
            "check eligibility",
        ],
        response: "Eligibility for welfare services depends on:\n\n• **Income Level** - Monthly household income\n• **Family Size** - Number of dependents\n• **Age** - Specific programs have age requirements\n• **Health Condition** - For health-related programs\n• **Employment Status** - Current employment situation\n\nYou can check your eligibility by visiting our Health Services page and filling out the eligibility form.",
    },
    BuiltinIntent {
        name: "create_account",
        triggers: &[
            "create account",
            "register",
            "sign up",
            "registration",
            "how to register",
            "new account",
            "open account",
            "join",
            "signup",
        ],
        response: "To register on our platform:\n\n1. Click on the Login/Register button\n2. Enter your NIC (National Identity Card) number\n3. Provide your mobile number and email\n4. Create a password\n5. Verify your account via SMS/email\n\nRegistration is completely FREE!",
    },
    BuiltinIntent {
        name: "how_to_apply",
        triggers: &[
            "how to apply",
            "apply",
            "application process",
            "submit application",
            "how do i apply",
            "application",
            "apply for",
            "want to apply",
            "need to apply",
            "start application",
        ],
        response: "To apply for welfare services:\n\n1. Go to the **Services** page\n2. Select the program you need (Health, Education, Financial Aid, etc.)\n3. Click \"Learn More\" to view details\n4. Fill out the eligibility/application form\n5. Submit required documents\n6. Wait for approval (2-4 weeks)\n\nYou can track your application status in your dashboard.",
    },
    BuiltinIntent {
        name: "required_documents",
        triggers: &[
            "documents",
            "required documents",
            "what documents",
            "papers",
            "paperwork",
            "need to submit",
            "upload",
            "nic",
            "proof",
            "certificate",
        ],
        response: "Required documents for most applications:\n\n📄 **National Identity Card (NIC)** - Original or certified copy\n📄 **Proof of Income** - Salary slips, bank statements, or Grama Niladhari certificate\n📄 **Family Certificate** - For family-based benefits\n📄 **Medical Reports** - For health-related programs\n📄 **Birth Certificate** - For age verification\n\nAccepted formats: PDF, JPG, PNG (max 5MB each)",
    },
    BuiltinIntent {
        name: "health_services",
        triggers: &[
            "health",
            "medical",
            "doctor",
            "hospital",
            "treatment",
            "healthcare",
            "medicine",
            "clinic",
            "sick",
            "illness",
            "disease",
            "checkup",
            "consultation",
        ],
        response: "Our Health Services program offers:\n\n✅ Free medical consultations at government hospitals\n✅ Subsidized medications (up to 80% discount)\n✅ Hospital treatment coverage\n✅ Preventive health checkups\n✅ Maternal and child health services\n✅ Mental health support\n\nTo check if you qualify, visit the Health Services page and fill out the eligibility form. Our AI system will recommend suitable hospitals and doctors based on your condition.",
    },
    BuiltinIntent {
        name: "education_support",
        triggers: &[
            "education",
            "school",
            "scholarship",
            "study",
            "university",
            "college",
            "student",
            "learn",
            "books",
            "tuition",
            "exam",
            "degree",
        ],
        response: "Our Education Support program includes:\n\n🎓 Full and partial scholarships\n📚 Free textbooks and school supplies\n💻 Laptop/tablet provision for students\n📖 Tutorial and extra classes\n🍽️ School meal programs\n🎯 Higher education assistance\n\nEligible students from low-income families can apply through the Services page.",
    },
    BuiltinIntent {
        name: "financial_aid",
        triggers: &[
            "financial",
            "money",
            "allowance",
            "funds",
            "cash",
            "payment",
            "aid",
            "assistance",
            "loan",
            "grant",
            "welfare money",
            "monthly payment",
        ],
        response: "Financial Aid programs available:\n\n💵 Monthly welfare allowances\n🆘 Emergency financial assistance\n🏠 Housing support\n👴 Senior citizen pensions\n👨‍👩‍👧‍👦 Family support payments\n💼 Livelihood and self-employment support\n\nBenefits are transferred directly to your bank account.",
    },
    BuiltinIntent {
        name: "approval_time",
        triggers: &[
            "how long",
            "time",
            "duration",
            "when",
            "approval time",
            "waiting",
            "how many days",
            "how many weeks",
            "processing time",
            "take",
        ],
        response: "Application processing times:\n\n⏱️ **Initial Review**: 3-5 working days\n⏱️ **Document Verification**: 1-2 weeks\n⏱️ **Final Approval**: 2-4 weeks total\n\nYou will receive SMS and email notifications about your application status. You can also track progress in your dashboard.",
    },
    BuiltinIntent {
        name: "check_status",
        triggers: &[
            "status",
            "check status",
            "track",
            "progress",
            "where is my application",
            "my application",
            "application status",
            "update",
            "result",
        ],
        response: "To check your application status:\n\n1. Log in to your account\n2. Go to your Dashboard\n3. View \"My Applications\" section\n4. Click on any application to see detailed status\n\nStatus types: Pending → Under Review → Approved/Rejected",
    },
    BuiltinIntent {
        name: "contact_support",
        triggers: &[
            "contact",
            "support",
            "help desk",
            "call",
            "reach",
            "phone",
            "email",
            "hotline",
            "office",
            "speak to someone",
            "human",
            "agent",
        ],
        response: "Need help? Contact us through:\n\n💬 **This Chatbot** - Available 24/7\n📞 **Hotline**: 1919 (Government helpline)\n📧 **Email**: support@welfare.gov.lk\n🏢 **In Person**: Visit your nearest Divisional Secretariat office\n\nOffice hours: Monday-Friday, 8:30 AM - 4:30 PM",
    },
    BuiltinIntent {
        name: "data_secure",
        triggers: &[
            "secure",
            "safe",
            "security",
            "data protection",
            "privacy",
            "confidential",
            "data",
            "information safe",
            "protect",
        ],
        response: "Your data is completely secure:\n\n🔒 All data is encrypted\n🔒 Stored on government-secured servers\n🔒 Not shared with third parties\n🔒 Compliant with data protection laws\n\nOnly authorized officials can access your information for processing applications.",
    },
    BuiltinIntent {
        name: "platform_free",
        triggers: &[
            "free",
            "cost",
            "charge",
            "fee",
            "payment",
            "pay",
            "price",
            "how much",
            "expensive",
        ],
        response: "Yes! This platform is 100% FREE.\n\n✅ No registration fees\n✅ No application fees\n✅ No hidden charges\n✅ All services are government-funded\n\n⚠️ Beware of scammers asking for money!",
    },
    BuiltinIntent {
        name: "languages",
        triggers: &["language", "sinhala", "tamil", "english", "translate", "change language"],
        response: "Our platform supports:\n\n🇱🇰 **Sinhala** (සිංහල)\n🇱🇰 **Tamil** (தமிழ்)\n🇬🇧 **English**\n\nYou can switch languages from the settings.",
    },
    BuiltinIntent {
        name: "investment",
        triggers: &[
            "investment",
            "invest",
            "savings",
            "financial planning",
            "retirement",
            "pension planning",
            "money management",
        ],
        response: "Our Investment Recommender service helps you with:\n\n📈 Financial planning advice\n💰 Savings optimization strategies\n🏦 Bank account recommendations\n📊 Investment options guidance\n👴 Retirement planning assistance\n\nThis service is available to all registered users.",
    },
    BuiltinIntent {
        name: "senior_care",
        triggers: &[
            "senior",
            "elderly",
            "old age",
            "pension",
            "retired",
            "elder",
            "grandparent",
            "old people",
        ],
        response: "Senior Care services for elderly citizens:\n\n👴 Pension assistance\n🏥 Priority healthcare access\n🏠 Elderly home support\n💊 Medication subsidies\n🚗 Transportation assistance\n👨‍👩‍👧 Caregiver support programs",
    },
    BuiltinIntent {
        name: "appeal",
        triggers: &[
            "appeal",
            "rejected",
            "denied",
            "reapply",
            "reconsider",
            "not approved",
            "failed",
            "try again",
        ],
        response: "If your application is rejected, you can appeal:\n\n1. Log in to your account\n2. Go to the rejected application\n3. Click \"Submit Appeal\"\n4. Provide additional documents or explanation\n5. Wait for re-evaluation (1-2 weeks)\n\nYou can also visit your Divisional Secretariat for assistance.",
    },
];

pub(crate) static SINHALA_INTENTS: &[BuiltinIntent] = &[
    BuiltinIntent {
        name: "programs",
        triggers: &["වැඩසටහන්", "වැඩසටහන", "ප්‍රතිලාභ", "සේවා"],
        response: "මුල්‍ය, සෞඛ්‍ය, අධ්‍යාපන සහ සමාජ ප්‍රතිසාධන වැඩසටහන් ලබා ගත හැක.",
    },
    BuiltinIntent {
        name: "eligibility",
        triggers: &["සුදුසුකම්", "අයදුම්", "ප්‍රතිපත්ති"],
        response: "ආදායම, පවුල් ප්‍රමාණය, වයස සහ සෞඛ්‍ය තත්ත්වය අනුව සුදුසුකම් තීරණය වේ.",
    },
    BuiltinIntent {
        name: "register",
        triggers: &["ලියාපදිංචි", "ගිණුමක්"],
        response: "ජාතික හැඳුනුම්පත් අංකය, දුරකථන අංකය සහ ඊමේල් භාවිතා කර ලියාපදිංචි විය හැක.",
    },
    BuiltinIntent {
        name: "free",
        triggers: &["නොමිලේ", "මිල"],
        response: "ඔව්, මෙම වේදිකාව සම්පූර්ණයෙන්ම නොමිලේ.",
    },
    BuiltinIntent {
        name: "apply",
        triggers: &["අයදුම්", "යොදන්නේ"],
        response: "අදාල වැඩසටහන තෝරා අන්තර්ජාල අයදුම්පත්‍රය යොදන්න.",
    },
    BuiltinIntent {
        name: "documents",
        triggers: &["ලේඛන", "අවශ්‍ය"],
        response: "ජාතික හැඳුනුම්පත සහ ආදායම් සනාථ කිරීම අවශ්‍යයි.",
    },
    BuiltinIntent {
        name: "time",
        triggers: &["කාලය", "කොපමණ", "දින", "සති"],
        response: "සාමාන්‍යයෙන් සති 2-4 ගතවේ.",
    },
    BuiltinIntent {
        name: "status",
        triggers: &["තත්ත්වය", "බලන්නේ"],
        response: "ඔබගේ ගිණුම ඇතුළත තත්ත්වය බලන්න.",
    },
    BuiltinIntent {
        name: "support",
        triggers: &["සහාය", "උදව්"],
        response: "ඔව්, චැට්බෝට් සහාය 24/7 ලබා ගත හැක.",
    },
    BuiltinIntent {
        name: "health",
        triggers: &["සෞඛ්‍ය", "වෛද්‍ය", "රෝහල්"],
        response: "සෞඛ්‍ය සේවා මගින් නොමිලේ වෛද්‍ය උපදේශන, සහනාධාර ඖෂධ, රෝහල් ප්‍රතිකාර ආවරණය ලබා දේ.",
    },
];
