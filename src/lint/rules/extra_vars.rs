//! Custom build script variables must start with an underscore.

use crate::lint::{LintDiagnostic, LintReport, LintRule, RuleId, Severity};
use crate::package::{PackageInfo, PackageKind};

/// Variables that may be suffixed with an architecture (`depends_x86_64`).
const ARCH_VARS: &[&str] = &[
    "checkdepends",
    "conflicts",
    "depends",
    "makedepends",
    "optdepends",
    "provides",
    "replaces",
    "source",
    "md5sums",
    "sha1sums",
    "sha256sums",
    "sha384sums",
    "sha512sums",
];

/// Other variables with a meaning to the build tool.
const STANDARD_VARS: &[&str] = &[
    "arch",
    "license",
    "backup",
    "noextract",
    "pkgname",
    "pkgbase",
    "pkgver",
    "pkgrel",
    "epoch",
    "pkgdesc",
    "groups",
    "url",
    "install",
    "changelog",
    "options",
    "validpgpkeys",
];

/// Verifies that extra variables start with an underscore.
pub struct ExtraVarsRule;

impl ExtraVarsRule {
    fn is_standard(varname: &str, arches: &[String]) -> bool {
        if STANDARD_VARS.contains(&varname) || ARCH_VARS.contains(&varname) {
            return true;
        }
        arches.len() >= 2
            && ARCH_VARS.iter().any(|var| {
                arches
                    .iter()
                    .any(|arch| varname == format!("{}_{}", var, arch))
            })
    }

    fn is_lowercase(varname: &str) -> bool {
        varname.chars().any(char::is_alphabetic) && !varname.chars().any(char::is_uppercase)
    }
}

impl LintRule for ExtraVarsRule {
    fn id(&self) -> RuleId {
        RuleId::new("extravars")
    }

    fn name(&self) -> &str {
        "Extra Variables"
    }

    fn description(&self) -> &str {
        "Verifies that extra variables start with an underscore"
    }

    fn kind(&self) -> PackageKind {
        PackageKind::BuildScript
    }

    fn check(&self, package: &PackageInfo) -> LintReport {
        let mut report = LintReport::new();
        let arches = package.get("arch").unwrap_or_default();

        for varname in &package.setvars {
            if Self::is_lowercase(varname)
                && !varname.starts_with('_')
                && !Self::is_standard(varname, arches)
            {
                report.push(
                    LintDiagnostic::new(
                        self.id(),
                        Severity::Warning,
                        "extra-var-begins-without-underscore %s",
                    )
                    .with_arg(varname),
                );
            }
        }

        report
    }
}
