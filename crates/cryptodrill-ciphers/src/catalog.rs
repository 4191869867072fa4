//! Cipher catalog: identifiers, directions and static metadata
//!
//! Every supported cipher has exactly one [`CipherSpec`] describing how it is
//! presented to a learner and which directions it implements. The dispatcher
//! in [`crate::transform`] consults the capability flags before touching the
//! key, so callers never have to discover an unsupported direction by
//! inspecting output text.

use std::fmt;
use std::str::FromStr;

use crate::error::CipherError;

/// Identifier of one cipher variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum CipherId {
    /// Mirror alphabet substitution
    Atbash,
    /// Fixed shift
    Caesar,
    /// Monoalphabetic substitution with word breaks
    Aristocrat,
    /// Aristocrat whose plaintext may contain misspellings
    AristocratMisspelled,
    /// Aristocrat without word breaks
    Patristocrat,
    /// Spanish substitution over 27 letters
    Xenocrypt,
    /// 2×2 matrix cipher
    #[cfg_attr(feature = "serde", serde(rename = "hill-2x2"))]
    Hill2x2,
    /// 3×3 matrix cipher
    #[cfg_attr(feature = "serde", serde(rename = "hill-3x3"))]
    Hill3x3,
    /// Linear map `ax + b`
    Affine,
    /// Five-symbol A/B code
    Baconian,
    /// Morse trigram substitution
    FractionatedMorse,
    /// Reciprocal digraphic tableau
    Porta,
    /// Stick-figure run-length code
    DancingMen,
    /// Letter-wise toy RSA
    Rsa,
    /// Vigenère-style running key
    RunningKey,
    /// Zigzag transposition
    Railfence,
    /// Alphametic letter mapping
    Cryptarithm,
    /// Keyed column transposition
    CompleteColumnar,
    /// Morse to digits
    Pollux,
    /// Morse pairs to digits
    Morbit,
}

impl CipherId {
    /// All ciphers in catalog order
    pub const ALL: [Self; 20] = [
        Self::Atbash,
        Self::Caesar,
        Self::Aristocrat,
        Self::AristocratMisspelled,
        Self::Patristocrat,
        Self::Xenocrypt,
        Self::Hill2x2,
        Self::Hill3x3,
        Self::Affine,
        Self::Baconian,
        Self::FractionatedMorse,
        Self::Porta,
        Self::DancingMen,
        Self::Rsa,
        Self::RunningKey,
        Self::Railfence,
        Self::Cryptarithm,
        Self::CompleteColumnar,
        Self::Pollux,
        Self::Morbit,
    ];

    /// Static metadata for this cipher
    pub fn spec(self) -> &'static CipherSpec {
        &CATALOG[self as usize]
    }

    /// Canonical slug, e.g. `hill-2x2`
    pub fn slug(self) -> &'static str {
        self.spec().slug
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CipherId {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        CATALOG
            .iter()
            .find(|spec| spec.slug == wanted)
            .map(|spec| spec.id)
            .ok_or_else(|| CipherError::UnknownCipher(s.to_string()))
    }
}

/// Which rule of a cipher to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl Direction {
    /// Both directions, encrypt first
    pub const BOTH: [Self; 2] = [Self::Encrypt, Self::Decrypt];

    /// The other direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::Encrypt => Self::Decrypt,
            Self::Decrypt => Self::Encrypt,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}

impl FromStr for Direction {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" | "encode" | "e" => Ok(Self::Encrypt),
            "decrypt" | "decode" | "d" => Ok(Self::Decrypt),
            _ => Err(CipherError::UnknownDirection(s.to_string())),
        }
    }
}

/// Static description of one cipher
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CipherSpec {
    /// Identifier
    pub id: CipherId,
    /// Canonical slug
    pub slug: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-paragraph description
    pub description: &'static str,
    /// Expected key shape
    pub key_hint: &'static str,
    /// Whether the cipher reads its key at all
    pub requires_key: bool,
    /// Encrypt direction is implemented
    pub supports_encrypt: bool,
    /// Decrypt direction is implemented
    pub supports_decrypt: bool,
}

impl CipherSpec {
    /// Whether `direction` is implemented for this cipher
    pub const fn supports(&self, direction: Direction) -> bool {
        match direction {
            Direction::Encrypt => self.supports_encrypt,
            Direction::Decrypt => self.supports_decrypt,
        }
    }

    /// Directions this cipher implements, encrypt first
    pub fn directions(&self) -> Vec<Direction> {
        Direction::BOTH
            .into_iter()
            .filter(|d| self.supports(*d))
            .collect()
    }
}

const NO_KEY: &str = "No key required";

// Indexed by `CipherId as usize`; the order must follow the enum.
static CATALOG: [CipherSpec; 20] = [
    CipherSpec {
        id: CipherId::Atbash,
        slug: "atbash",
        name: "AtBash Cipher",
        description: "Each letter is replaced with its mirror in the alphabet (A↔Z, B↔Y, ...).",
        key_hint: NO_KEY,
        requires_key: false,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Caesar,
        slug: "caesar",
        name: "Caesar Cipher",
        description: "Each letter is shifted a fixed number of positions. The key is the shift amount.",
        key_hint: "Enter shift amount (e.g., 3)",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Aristocrat,
        slug: "aristocrat",
        name: "Aristocrat Cipher",
        description: "Monoalphabetic substitution with word breaks. The key is a 26-letter alphabet permutation.",
        key_hint: "Enter 26 unique letters (e.g., ZYXWVUTSRQPONMLKJIHGFEDCBA)",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::AristocratMisspelled,
        slug: "aristocrat-misspelled",
        name: "Aristocrat Misspelled",
        description: "An Aristocrat whose plaintext may contain deliberate misspellings. The key is a 26-letter alphabet permutation.",
        key_hint: "Enter 26 unique letters",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Patristocrat,
        slug: "patristocrat",
        name: "Patristocrat Cipher",
        description: "Monoalphabetic substitution usually presented without word breaks. The key is a 26-letter alphabet permutation.",
        key_hint: "Enter 26 unique letters",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Xenocrypt,
        slug: "xenocrypt",
        name: "Xenocrypt Cipher",
        description: "Spanish substitution cipher. The key is a 27-letter alphabet permutation including Ñ.",
        key_hint: "Enter 27 unique letters including Ñ",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Hill2x2,
        slug: "hill-2x2",
        name: "Hill 2x2 Cipher",
        description: "Letter pairs are multiplied by a 2x2 matrix mod 26. The determinant must be coprime with 26.",
        key_hint: "Enter 4 numbers: a b c d (e.g., 2 1 3 4)",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Hill3x3,
        slug: "hill-3x3",
        name: "Hill 3x3 Cipher",
        description: "Letter triples are multiplied by a 3x3 matrix mod 26. Only encryption is supported.",
        key_hint: "Enter 9 numbers: a b c d e f g h i",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: false,
    },
    CipherSpec {
        id: CipherId::Affine,
        slug: "affine",
        name: "Affine Cipher",
        description: "Linear cipher E(x) = (ax + b) mod 26 where gcd(a, 26) = 1.",
        key_hint: "Enter two numbers: a, b (e.g., 5, 8)",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Baconian,
        slug: "baconian",
        name: "Baconian Cipher",
        description: "Each letter is encoded as a 5-letter sequence of A and B.",
        key_hint: NO_KEY,
        requires_key: false,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::FractionatedMorse,
        slug: "fractionated-morse",
        name: "Fractionated Morse Cipher",
        description: "Text is converted to Morse, split into trigrams and each trigram is replaced by a key letter. Only encryption is supported.",
        key_hint: "Enter at least 9 letters",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: false,
    },
    CipherSpec {
        id: CipherId::Porta,
        slug: "porta",
        name: "Porta Cipher",
        description: "Reciprocal polyalphabetic cipher using a tableau with one row per pair of key letters.",
        key_hint: "Enter a word or phrase",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::DancingMen,
        slug: "dancing-men",
        name: "Dancing Men Cipher",
        description: "Letters become runs of figures: A is one figure, Z is twenty-six.",
        key_hint: NO_KEY,
        requires_key: false,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Rsa,
        slug: "rsa",
        name: "RSA Cipher",
        description: "Letter-wise toy RSA: each letter index is raised to the exponent mod n, then reduced mod 26.",
        key_hint: "Enter: n, e (for encrypt) or n, d (for decrypt)",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::RunningKey,
        slug: "running-key",
        name: "Running Key Cipher",
        description: "Each letter is shifted by the next letter of a long key text.",
        key_hint: "Enter a word or phrase",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Railfence,
        slug: "railfence",
        name: "Railfence Cipher",
        description: "Text is written in a zigzag across the rails and read off row by row.",
        key_hint: "Enter number of rails (e.g., 3)",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Cryptarithm,
        slug: "cryptarithm",
        name: "Cryptarithm",
        description: "Alphametic puzzle solved by applying a letter-to-letter mapping. Only decryption is supported.",
        key_hint: "Enter letter substitution key",
        requires_key: true,
        supports_encrypt: false,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::CompleteColumnar,
        slug: "complete-columnar",
        name: "Complete Columnar Transposition",
        description: "Text is written in rows under a keyword and read down the columns in alphabetical key order.",
        key_hint: "Enter a word or phrase",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Pollux,
        slug: "pollux",
        name: "Pollux Cipher",
        description: "Morse code written as digits: . = 1, - = 2, letter separator = 0.",
        key_hint: NO_KEY,
        requires_key: false,
        supports_encrypt: true,
        supports_decrypt: true,
    },
    CipherSpec {
        id: CipherId::Morbit,
        slug: "morbit",
        name: "Morbit Cipher",
        description: "Morse code pairs mapped to digits. Only encryption is supported.",
        key_hint: "Enter 9 digits (e.g., 123456789)",
        requires_key: true,
        supports_encrypt: true,
        supports_decrypt: false,
    },
];

/// All cipher specs in catalog order
pub fn catalog() -> &'static [CipherSpec] {
    &CATALOG
}
