pub mod resume;
pub mod skills;

pub use resume::{
    EducationItem, EducationPatch, ExperienceItem, ExperiencePatch, ItemId, NewEducation,
    NewExperience, NewProject, PersonalInfo, PersonalInfoPatch, ProjectItem, ProjectPatch,
    ResumeData, TemplateKind, UnknownTemplate,
};
