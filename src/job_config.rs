//! The Jenkins pipeline job document (`flow-definition`).
//!
//! Element names and the `class`/`plugin` attributes are what Jenkins parses
//! in `createItem`; they must not change.

use crate::xml::Element;

/// Filename prefix identifying a pipeline definition file.
pub const JENKINSFILE_PREFIX: &str = "Jenkinsfile";
/// Prefix the generator puts in front of the source filename.
pub const CONFIG_PREFIX: &str = "config_";
pub const CONFIG_SUFFIX: &str = ".xml";
/// Full prefix the uploader expects: `config_` followed by `Jenkinsfile.`.
pub const UPLOAD_PREFIX: &str = "config_Jenkinsfile.";

/// Parameters of one job document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDefinition<'a> {
    pub repo_url: &'a str,
    pub branch: &'a str,
    /// Path of the Jenkinsfile inside the checkout.
    pub script_path: &'a str,
}

impl JobDefinition<'_> {
    /// Builds the element tree for this job.
    pub fn to_element(&self) -> Element {
        let scm = Element::new("scm")
            .attr("class", "hudson.plugins.git.GitSCM")
            .attr("plugin", "git")
            .child(Element::new("configVersion").text("2"))
            .child(
                Element::new("userRemoteConfigs").child(
                    Element::new("hudson.plugins.git.UserRemoteConfig")
                        .child(Element::new("url").text(self.repo_url)),
                ),
            )
            .child(
                Element::new("branches").child(
                    Element::new("hudson.plugins.git.BranchSpec")
                        .child(Element::new("name").text(branch_spec(self.branch))),
                ),
            )
            .child(Element::new("doGenerateSubmoduleConfigurations").text("false"))
            .child(Element::new("submoduleCfg").attr("class", "list"))
            .child(Element::new("extensions"));

        let definition = Element::new("definition")
            .attr("class", "org.jenkinsci.plugins.workflow.cps.CpsScmFlowDefinition")
            .attr("plugin", "workflow-cps")
            .child(scm)
            .child(Element::new("scriptPath").text(self.script_path))
            .child(Element::new("lightweight").text("true"));

        Element::new("flow-definition")
            .attr("plugin", "workflow-job")
            .child(Element::new("description").text(""))
            .child(Element::new("keepDependencies").text("false"))
            .child(definition)
            .child(Element::new("triggers"))
    }

    /// Serialized document, ready to be written to disk.
    pub fn render(&self) -> String {
        self.to_element().to_document()
    }
}

/// Jenkins branch specifier for a plain branch name.
pub fn branch_spec(branch: &str) -> String {
    format!("*/{branch}")
}

/// True for names the generator picks up.
pub fn is_jenkinsfile(filename: &str) -> bool {
    filename.starts_with(JENKINSFILE_PREFIX)
}

/// Output filename for a Jenkinsfile: `config_<filename>.xml`.
pub fn config_file_name(jenkinsfile: &str) -> String {
    format!("{CONFIG_PREFIX}{jenkinsfile}{CONFIG_SUFFIX}")
}

/// Job name encoded in a generated document filename.
///
/// `config_Jenkinsfile.<name>.xml` yields `<name>`. Anything else, including
/// an empty `<name>`, yields `None`.
pub fn job_name_from_config_file(filename: &str) -> Option<&str> {
    filename
        .strip_prefix(UPLOAD_PREFIX)?
        .strip_suffix(CONFIG_SUFFIX)
        .filter(|name| !name.is_empty())
}
