pub mod profile;

pub use profile::{
    About, Certification, Degree, Highlight, Job, Personal, Profile, ResponsibilityGroup,
    SkillCategory, SkillGroup, SkillSet, SkillShape, Social,
};
