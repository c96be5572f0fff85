//! Vietnamese kinship address terms.
//!
//! [`KinshipTerm`] is what the base person calls the target. `Display`
//! renders the Vietnamese term, [`KinshipTerm::gloss`] an English
//! description. Terms that depend on unknown data fall back to dual forms
//! such as `Anh/Em` rather than guessing.

use std::fmt;

use serde::Serialize;

use kinfolk_core::model::Gender;

use super::Seniority;

/// Which parent's family a relative belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Through the father (nội).
    Paternal,
    /// Through the mother (ngoại).
    Maternal,
    Unknown,
}

impl Side {
    /// The side a relative reached through `connecting` belongs to.
    pub fn of(connecting: Gender) -> Self {
        match connecting {
            Gender::Male => Self::Paternal,
            Gender::Female => Self::Maternal,
            Gender::Other => Self::Unknown,
        }
    }

    fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Paternal => Some("nội"),
            Self::Maternal => Some("ngoại"),
            Self::Unknown => None,
        }
    }
}

/// A classified kinship relation from a base person to a target.
///
/// `gender` fields always describe the target unless named otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "relation", rename_all = "kebab-case")]
pub enum KinshipTerm {
    /// The base person themself.
    Oneself,
    /// Related, but not in a shape with a specific term.
    Relative,
    /// Same generation, not in a shape with a specific term.
    SameGenerationKin,
    Spouse {
        gender: Gender,
    },
    Sibling {
        seniority: Seniority,
        gender: Gender,
    },
    /// A sibling's spouse; `seniority` is the sibling's.
    SiblingSpouse {
        seniority: Seniority,
        gender: Gender,
    },
    /// A spouse's sibling; `seniority` is relative to the spouse.
    SpouseSibling {
        seniority: Seniority,
        gender: Gender,
        spouse_gender: Gender,
    },
    /// A cousin; `seniority` follows the elder line first.
    Cousin {
        seniority: Seniority,
        gender: Gender,
    },
    Parent {
        gender: Gender,
    },
    StepParent {
        gender: Gender,
    },
    ParentInLaw {
        gender: Gender,
        spouse_gender: Gender,
    },
    /// A parent's sibling; `seniority` is relative to that parent.
    ParentSibling {
        side: Side,
        seniority: Seniority,
        gender: Gender,
    },
    /// The spouse of a parent's sibling.
    ParentSiblingSpouse {
        side: Side,
        seniority: Seniority,
        sibling_gender: Gender,
        gender: Gender,
    },
    Child {
        gender: Gender,
    },
    StepChild {
        gender: Gender,
    },
    ChildInLaw {
        gender: Gender,
    },
    NieceNephew {
        gender: Gender,
    },
    Grandparent {
        side: Side,
        gender: Gender,
    },
    /// A grandparent's sibling; `side` and `seniority` are relative to the grandparent.
    GrandparentSibling {
        side: Side,
        seniority: Seniority,
        gender: Gender,
    },
    /// A grandchild; `side` is through a son (nội) or a daughter (ngoại).
    Grandchild {
        side: Side,
        gender: Gender,
    },
    GrandNieceNephew {
        gender: Gender,
    },
    GreatGrandparent {
        gender: Gender,
    },
    GreatGrandchild {
        gender: Gender,
    },
    ElderGeneration,
    YoungerGeneration,
}

/// `male`, `female`, or both joined by `/`.
fn gendered(gender: Gender, male: &'static str, female: &'static str) -> String {
    match gender {
        Gender::Male => male.to_string(),
        Gender::Female => female.to_string(),
        Gender::Other => format!("{male}/{female}"),
    }
}

/// Sibling-style prefix: Anh, Chị, Em and their dual forms.
fn sibling_prefix(seniority: Seniority, gender: Gender) -> String {
    match (seniority, gender) {
        (Seniority::Elder, gender) => gendered(gender, "Anh", "Chị"),
        (Seniority::Younger, _) => "Em".to_string(),
        (Seniority::Unknown, Gender::Male) => "Anh/Em".to_string(),
        (Seniority::Unknown, Gender::Female) => "Chị/Em".to_string(),
        (Seniority::Unknown, Gender::Other) => "Anh/Chị/Em".to_string(),
    }
}

/// Term for a younger sibling of a parent.
fn younger_parent_sibling(side: Side, gender: Gender) -> String {
    match side {
        Side::Paternal => gendered(gender, "Chú", "Cô"),
        Side::Maternal => gendered(gender, "Cậu", "Dì"),
        Side::Unknown => gendered(gender, "Chú/Cậu", "Cô/Dì"),
    }
}

/// Term for the spouse of a younger sibling of a parent.
fn younger_parent_sibling_spouse(side: Side, sibling_gender: Gender, gender: Gender) -> String {
    match (sibling_gender, side) {
        (Gender::Female, _) => "Dượng".to_string(),
        (Gender::Male, Side::Paternal) => "Thím".to_string(),
        (Gender::Male, Side::Maternal) => "Mợ".to_string(),
        (Gender::Male, Side::Unknown) => "Thím/Mợ".to_string(),
        (Gender::Other, _) => gendered(gender, "Dượng", "Thím/Mợ"),
    }
}

fn with_seniority(seniority: Seniority, younger: String) -> String {
    match seniority {
        Seniority::Elder => "Bác".to_string(),
        Seniority::Younger => younger,
        Seniority::Unknown => format!("Bác/{younger}"),
    }
}

fn with_side(base: String, side: Side) -> String {
    match side.suffix() {
        Some(suffix) => format!("{base} {suffix}"),
        None => base,
    }
}

impl KinshipTerm {
    /// The Vietnamese address term.
    pub fn address(&self) -> String {
        match *self {
            Self::Oneself => "Tôi".to_string(),
            Self::Relative => "Họ hàng".to_string(),
            Self::SameGenerationKin => "Thân tộc".to_string(),
            Self::Spouse { gender } => gendered(gender, "Chồng", "Vợ"),
            Self::Sibling { seniority, gender } => sibling_prefix(seniority, gender),
            Self::SiblingSpouse { seniority, gender } => format!(
                "{} {}",
                sibling_prefix(seniority, gender),
                gendered(gender, "rể", "dâu")
            ),
            Self::SpouseSibling {
                seniority,
                gender,
                spouse_gender,
            } => format!(
                "{} {}",
                sibling_prefix(seniority, gender),
                gendered(spouse_gender, "chồng", "vợ")
            ),
            Self::Cousin { seniority, gender } => {
                format!("{} họ", sibling_prefix(seniority, gender))
            }
            Self::Parent { gender } => gendered(gender, "Cha", "Mẹ"),
            Self::StepParent { gender } => gendered(gender, "Bố dượng", "Mẹ kế"),
            Self::ParentInLaw {
                gender,
                spouse_gender,
            } => format!(
                "{} {}",
                gendered(gender, "Bố", "Mẹ"),
                gendered(spouse_gender, "chồng", "vợ")
            ),
            Self::ParentSibling {
                side,
                seniority,
                gender,
            } => with_seniority(seniority, younger_parent_sibling(side, gender)),
            Self::ParentSiblingSpouse {
                side,
                seniority,
                sibling_gender,
                gender,
            } => with_seniority(
                seniority,
                younger_parent_sibling_spouse(side, sibling_gender, gender),
            ),
            Self::Child { gender } => match gender {
                Gender::Male => "Con trai".to_string(),
                Gender::Female => "Con gái".to_string(),
                Gender::Other => "Con".to_string(),
            },
            Self::StepChild { .. } => "Con riêng".to_string(),
            Self::ChildInLaw { gender } => gendered(gender, "Con rể", "Con dâu"),
            Self::NieceNephew { gender } => match gender {
                Gender::Male => "Cháu trai".to_string(),
                Gender::Female => "Cháu gái".to_string(),
                Gender::Other => "Cháu".to_string(),
            },
            Self::Grandparent { side, gender } => with_side(gendered(gender, "Ông", "Bà"), side),
            Self::GrandparentSibling {
                side,
                seniority,
                gender,
            } => match (seniority, side, gender) {
                (_, _, Gender::Other) => "Ông/Bà".to_string(),
                (Seniority::Elder, _, gender) => format!("{} bác", gendered(gender, "Ông", "Bà")),
                (Seniority::Younger, Side::Paternal, gender) => gendered(gender, "Ông chú", "Bà cô"),
                (Seniority::Younger, Side::Maternal, gender) => gendered(gender, "Ông cậu", "Bà dì"),
                (_, _, gender) => gendered(gender, "Ông", "Bà"),
            },
            Self::Grandchild { side, .. } => with_side("Cháu".to_string(), side),
            Self::GrandNieceNephew { .. } => "Cháu".to_string(),
            Self::GreatGrandparent { gender } => match gender {
                Gender::Male => "Cụ ông".to_string(),
                Gender::Female => "Cụ bà".to_string(),
                Gender::Other => "Cụ".to_string(),
            },
            Self::GreatGrandchild { .. } => "Chắt".to_string(),
            Self::ElderGeneration => "Tiền bối".to_string(),
            Self::YoungerGeneration => "Hậu duệ".to_string(),
        }
    }

    /// An English description of the relation.
    pub fn gloss(&self) -> String {
        fn noun(gender: Gender, male: &str, female: &str, neutral: &str) -> String {
            match gender {
                Gender::Male => male.to_string(),
                Gender::Female => female.to_string(),
                Gender::Other => neutral.to_string(),
            }
        }
        fn rank(seniority: Seniority) -> &'static str {
            match seniority {
                Seniority::Elder => "elder ",
                Seniority::Younger => "younger ",
                Seniority::Unknown => "",
            }
        }
        fn side(side: Side) -> &'static str {
            match side {
                Side::Paternal => "paternal ",
                Side::Maternal => "maternal ",
                Side::Unknown => "",
            }
        }

        match *self {
            Self::Oneself => "self".to_string(),
            Self::Relative => "relative".to_string(),
            Self::SameGenerationKin => "kin of the same generation".to_string(),
            Self::Spouse { gender } => noun(gender, "husband", "wife", "spouse"),
            Self::Sibling { seniority, gender } => format!(
                "{}{}",
                rank(seniority),
                noun(gender, "brother", "sister", "sibling")
            ),
            Self::SiblingSpouse { seniority, gender } => format!(
                "{}sibling's {}",
                rank(seniority),
                noun(gender, "husband", "wife", "spouse")
            ),
            Self::SpouseSibling {
                seniority,
                gender,
                spouse_gender,
            } => format!(
                "{}'s {}{}",
                noun(spouse_gender, "husband", "wife", "spouse"),
                rank(seniority),
                noun(gender, "brother", "sister", "sibling")
            ),
            Self::Cousin { seniority, gender } => format!(
                "{}cousin{}",
                rank(seniority),
                noun(gender, " (male)", " (female)", "")
            ),
            Self::Parent { gender } => noun(gender, "father", "mother", "parent"),
            Self::StepParent { gender } => noun(gender, "stepfather", "stepmother", "step-parent"),
            Self::ParentInLaw {
                gender,
                spouse_gender,
            } => format!(
                "{}'s {}",
                noun(spouse_gender, "husband", "wife", "spouse"),
                noun(gender, "father", "mother", "parent")
            ),
            Self::ParentSibling {
                side: s,
                seniority,
                gender,
            } => format!(
                "{}{} ({}sibling of a parent)",
                side(s),
                noun(gender, "uncle", "aunt", "uncle or aunt"),
                rank(seniority)
            ),
            Self::ParentSiblingSpouse { side: s, gender, .. } => format!(
                "{}{} by marriage",
                side(s),
                noun(gender, "uncle", "aunt", "uncle or aunt")
            ),
            Self::Child { gender } => noun(gender, "son", "daughter", "child"),
            Self::StepChild { gender } => noun(gender, "stepson", "stepdaughter", "stepchild"),
            Self::ChildInLaw { gender } => noun(gender, "son-in-law", "daughter-in-law", "child-in-law"),
            Self::NieceNephew { gender } => noun(gender, "nephew", "niece", "nephew or niece"),
            Self::Grandparent { side: s, gender } => format!(
                "{}{}",
                side(s),
                noun(gender, "grandfather", "grandmother", "grandparent")
            ),
            Self::GrandparentSibling { side: s, gender, .. } => format!(
                "{}{}",
                side(s),
                noun(gender, "great-uncle", "great-aunt", "great-uncle or great-aunt")
            ),
            Self::Grandchild { side: s, gender } => format!(
                "{}{}",
                side(s),
                noun(gender, "grandson", "granddaughter", "grandchild")
            ),
            Self::GrandNieceNephew { gender } => {
                noun(gender, "grandnephew", "grandniece", "grandnephew or grandniece")
            }
            Self::GreatGrandparent { gender } => noun(
                gender,
                "great-grandfather",
                "great-grandmother",
                "great-grandparent",
            ),
            Self::GreatGrandchild { gender } => noun(
                gender,
                "great-grandson",
                "great-granddaughter",
                "great-grandchild",
            ),
            Self::ElderGeneration => "elder generation".to_string(),
            Self::YoungerGeneration => "younger generation".to_string(),
        }
    }

    /// Returns true for sibling terms naming an elder sibling.
    pub fn is_elder_sibling(&self) -> bool {
        matches!(
            self,
            Self::Sibling {
                seniority: Seniority::Elder,
                ..
            }
        )
    }

    /// Returns true for sibling terms naming a younger sibling.
    pub fn is_younger_sibling(&self) -> bool {
        matches!(
            self,
            Self::Sibling {
                seniority: Seniority::Younger,
                ..
            }
        )
    }
}

impl fmt::Display for KinshipTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address())
    }
}
