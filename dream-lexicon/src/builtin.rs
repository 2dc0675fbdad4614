//! Built-in lexicon tables
//!
//! Constant data only. Consumers turn these into owned `Lexicon` and
//! `SymbolDictionary` values through `Lexicon::builtin()` and
//! `SymbolDictionary::starter()`.

/// Label used when no theme keyword matches.
pub const DEFAULT_THEME: &str = "introspection";

/// Theme labels and their keywords, in classification order.
pub const THEMES: &[(&str, &[&str])] = &[
    (
        "transformation",
        &[
            "change", "transform", "become", "rebirth", "death", "die", "butterfly",
            "metamorphosis", "grow", "shed",
        ],
    ),
    (
        "anxiety",
        &[
            "chase", "chased", "fall", "fell", "lost", "trapped", "late", "exam", "naked",
            "teeth", "scared", "afraid", "panic", "fear",
        ],
    ),
    (
        "relationships",
        &[
            "mother", "father", "friend", "family", "partner", "lover", "child", "baby",
            "wedding", "kiss", "stranger",
        ],
    ),
    (
        "freedom",
        &["fly", "flew", "escape", "sky", "soar", "free", "wings"],
    ),
    (
        "emotions",
        &[
            "feel", "felt", "emotion", "water", "ocean", "cry", "tears", "love", "anger",
            "joy", "peaceful", "sad", "happy",
        ],
    ),
    (
        "spirituality",
        &["light", "god", "angel", "temple", "pray", "spirit", "sacred", "divine", "glow"],
    ),
    (
        "journey",
        &["road", "path", "travel", "journey", "car", "train", "door", "bridge", "walk", "map"],
    ),
    (
        "home",
        &["house", "home", "room", "childhood", "kitchen", "bed"],
    ),
];

pub const POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "love", "peaceful", "beautiful", "light", "calm", "free", "warm", "safe",
    "bright", "laugh", "smile", "hope", "wonder", "serene", "bliss", "gentle", "glow", "comfort",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "afraid", "fear", "scared", "dark", "chase", "fall", "lost", "trapped", "angry", "sad",
    "cry", "panic", "die", "alone", "pain", "hurt", "anxious", "nightmare", "monster",
    "tension", "scream", "shadow",
];

pub const STARTER_SYMBOLS: &[(&str, &str)] = &[
    ("baby", "new beginnings and untapped potential"),
    ("bridge", "a transition between two phases of life"),
    ("cat", "independence and intuition"),
    ("death", "an ending that makes room for something new"),
    ("dog", "loyalty and friendship"),
    ("door", "new opportunities waiting to be opened"),
    ("fall", "a loss of control or fear of failure"),
    ("fire", "passion, anger or purification"),
    ("fly", "freedom and a wider perspective"),
    ("forest", "the unknown parts of yourself"),
    ("house", "the self and your inner life"),
    ("key", "solutions and access to hidden knowledge"),
    ("mirror", "self-reflection and identity"),
    ("moon", "intuition and natural cycles"),
    ("ocean", "the vastness of the unconscious"),
    ("road", "your direction in life"),
    ("snake", "transformation, healing or hidden fears"),
    ("storm", "emotional turmoil"),
    ("teeth", "worries about appearance or communication"),
    ("water", "emotions and the unconscious mind"),
];
