use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StepId
// ---------------------------------------------------------------------------

/// One stage of the product-discovery wizard, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    ContextoProblema,
    Discovery,
    SwotCsd,
    Personas,
    PesquisaUsuarios,
    ValidacaoHipoteses,
    FeaturesPriorizacao,
    UserStoriesFluxos,
    CriteriosMetricas,
    RoadmapBacklog,
    Prototipo,
    PrdFinal,
    Lancamento,
}

impl StepId {
    pub fn all() -> &'static [StepId] {
        &[
            StepId::ContextoProblema,
            StepId::Discovery,
            StepId::SwotCsd,
            StepId::Personas,
            StepId::PesquisaUsuarios,
            StepId::ValidacaoHipoteses,
            StepId::FeaturesPriorizacao,
            StepId::UserStoriesFluxos,
            StepId::CriteriosMetricas,
            StepId::RoadmapBacklog,
            StepId::Prototipo,
            StepId::PrdFinal,
            StepId::Lancamento,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<StepId> {
        StepId::all().get(self.index() + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::ContextoProblema => "contexto-problema",
            StepId::Discovery => "discovery",
            StepId::SwotCsd => "swot-csd",
            StepId::Personas => "personas",
            StepId::PesquisaUsuarios => "pesquisa-usuarios",
            StepId::ValidacaoHipoteses => "validacao-hipoteses",
            StepId::FeaturesPriorizacao => "features-priorizacao",
            StepId::UserStoriesFluxos => "user-stories-fluxos",
            StepId::CriteriosMetricas => "criterios-metricas",
            StepId::RoadmapBacklog => "roadmap-backlog",
            StepId::Prototipo => "prototipo",
            StepId::PrdFinal => "prd-final",
            StepId::Lancamento => "lancamento",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StepId {
    type Err = crate::error::GenesixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepId::all()
            .iter()
            .copied()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| crate::error::GenesixError::UnknownStep(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A page identifier as carried by the URL fragment.
///
/// Parsing is total: identifiers the shell does not know become
/// [`Page::Unknown`], which renders as an empty view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    ForgotPassword,
    Dashboard,
    Documents,
    /// `documents-step-N`, N in 1..=3.
    DocumentDetail(u8),
    Collaboration,
    Analytics,
    Profile,
    Settings,
    Step(StepId),
    Unknown(String),
}

impl Page {
    pub fn parse(id: &str) -> Page {
        match id {
            "login" => Page::Login,
            "register" => Page::Register,
            "forgot-password" => Page::ForgotPassword,
            "dashboard" => Page::Dashboard,
            "documents" => Page::Documents,
            "documents-step-1" => Page::DocumentDetail(1),
            "documents-step-2" => Page::DocumentDetail(2),
            "documents-step-3" => Page::DocumentDetail(3),
            "collaboration" => Page::Collaboration,
            "analytics" => Page::Analytics,
            "profile" => Page::Profile,
            "settings" => Page::Settings,
            other => match other.parse::<StepId>() {
                Ok(step) => Page::Step(step),
                Err(_) => Page::Unknown(other.to_string()),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Page::Login => "login",
            Page::Register => "register",
            Page::ForgotPassword => "forgot-password",
            Page::Dashboard => "dashboard",
            Page::Documents => "documents",
            Page::DocumentDetail(1) => "documents-step-1",
            Page::DocumentDetail(2) => "documents-step-2",
            Page::DocumentDetail(_) => "documents-step-3",
            Page::Collaboration => "collaboration",
            Page::Analytics => "analytics",
            Page::Profile => "profile",
            Page::Settings => "settings",
            Page::Step(step) => step.as_str(),
            Page::Unknown(id) => id,
        }
    }

    /// Pages reachable without an authenticated session.
    pub fn is_public(&self) -> bool {
        matches!(self, Page::Login | Page::Register | Page::ForgotPassword)
    }

    /// Where the "advance to next step" signal of this page leads.
    ///
    /// Only step pages advance; the last step returns to the dashboard.
    pub fn advance_target(&self) -> Option<Page> {
        match self {
            Page::Step(step) => Some(step.next().map_or(Page::Dashboard, Page::Step)),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
