use crate::types::StepId;
use serde::Serialize;

/// Static presentation metadata for one wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    /// Opening message the assistant panel shows on the step.
    pub prompt: &'static str,
    pub tasks: &'static [&'static str],
}

const CATALOG: &[StepInfo] = &[
    StepInfo {
        id: StepId::ContextoProblema,
        title: "Contexto e Problema",
        description: "Identificação inicial do problema e da oportunidade de mercado.",
        prompt: "Para começarmos, me conte sobre o problema que seu produto busca resolver e o contexto atual do mercado. Qual a dor principal do seu usuário?",
        tasks: &[
            "Definir o problema central",
            "Analisar o cenário atual do mercado",
            "Identificar a dor principal do usuário",
            "Pesquisar soluções existentes",
        ],
    },
    StepInfo {
        id: StepId::Discovery,
        title: "Discovery",
        description: "Exploração do problema e levantamento de hipóteses iniciais",
        prompt: "Agora que entendemos o problema, vamos explorar as oportunidades. Quais são as hipóteses iniciais que você tem para a solução? Quais funcionalidades você imagina?",
        tasks: &[
            "Levantar hipóteses de solução",
            "Brainstorm de funcionalidades",
            "Mapear stakeholders",
            "Definir escopo inicial",
        ],
    },
    StepInfo {
        id: StepId::SwotCsd,
        title: "SWOT e CSD",
        description: "Análise de Forças, Fraquezas, Oportunidades, Ameaças e Matriz CSD (Certezas, Suposições, Dúvidas).",
        prompt: "Vamos consolidar o entendimento do projeto com uma análise SWOT e a Matriz CSD. Quais são os pontos fortes e fracos do seu produto? O que é certeza, suposição e dúvida?",
        tasks: &[],
    },
    StepInfo {
        id: StepId::Personas,
        title: "Personas",
        description: "Criação de Personas para representar os usuários-alvo.",
        prompt: "Descreva suas Personas. Quem são eles? Quais são seus objetivos, frustrações e como seu produto se encaixa na vida deles?",
        tasks: &[],
    },
    StepInfo {
        id: StepId::PesquisaUsuarios,
        title: "Pesquisa de Usuário",
        description: "Planejamento e execução da pesquisa de usuário.",
        prompt: "Quais métodos de pesquisa você usará? Quais perguntas você precisa responder para validar suas hipóteses?",
        tasks: &[],
    },
    StepInfo {
        id: StepId::ValidacaoHipoteses,
        title: "Teste de Hipóteses",
        description: "Definição e teste das hipóteses de solução.",
        prompt: "Quais hipóteses você vai testar? Como você vai medir o sucesso ou o fracasso de cada teste?",
        tasks: &[],
    },
    StepInfo {
        id: StepId::FeaturesPriorizacao,
        title: "Funcionalidades e Priorização",
        description: "Definição e priorização das funcionalidades do produto.",
        prompt: "Liste e priorize as funcionalidades. Use métodos como MoSCoW ou Kano. Quais são as essenciais (Must Have)?",
        tasks: &[],
    },
    StepInfo {
        id: StepId::UserStoriesFluxos,
        title: "User Stories e Fluxos",
        description: "Criação de User Stories e mapeamento dos fluxos de usuário.",
        prompt: "Escreva as User Stories no formato 'Como um [tipo de usuário], eu quero [objetivo], para que [benefício]'. Mapeie os fluxos principais.",
        tasks: &[],
    },
    StepInfo {
        id: StepId::CriteriosMetricas,
        title: "Critérios e Métricas",
        description: "Definição dos critérios de sucesso e métricas (KPIs).",
        prompt: "Defina os critérios de sucesso para o lançamento e as métricas (KPIs) que você usará para medir o desempenho do produto.",
        tasks: &[],
    },
    StepInfo {
        id: StepId::RoadmapBacklog,
        title: "Roadmap e Backlog",
        description: "Criação do Roadmap e do Backlog do produto.",
        prompt: "Organize as funcionalidades no Roadmap (curto, médio e longo prazo) e detalhe o Backlog para as próximas iterações.",
        tasks: &[],
    },
    StepInfo {
        id: StepId::Prototipo,
        title: "Protótipo",
        description: "Criação e teste do protótipo de alta fidelidade.",
        prompt: "Descreva o protótipo. Quais são as telas principais? Quais ferramentas você usou? Quais foram os resultados dos testes de usabilidade?",
        tasks: &[],
    },
    StepInfo {
        id: StepId::PrdFinal,
        title: "PRD Final",
        description: "Documento de Requisitos de Produto (PRD) finalizado.",
        prompt: "Revise e finalize o PRD. Ele deve conter todas as informações necessárias para o time de desenvolvimento.",
        tasks: &[],
    },
    StepInfo {
        id: StepId::Lancamento,
        title: "Lançamento",
        description: "Plano de lançamento e estratégia Go-to-Market.",
        prompt: "Qual é o seu plano de lançamento? Qual a estratégia de marketing e vendas? Como você vai medir o sucesso pós-lançamento?",
        tasks: &[],
    },
];

/// All steps in wizard order.
pub fn catalog() -> &'static [StepInfo] {
    CATALOG
}

pub fn info(step: StepId) -> &'static StepInfo {
    // CATALOG is declared in StepId order.
    &CATALOG[step.index()]
}
