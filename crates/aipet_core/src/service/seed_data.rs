//! Curated sample content inserted into empty collections.

use crate::model::case_study::{
    AipetImplementation, CaseStudy, CaseStudyResults, ComplexityLevel,
};
use crate::model::design_pattern::{DesignPattern, PatternType};
use crate::model::exercise::{Exercise, ExerciseCategory, ExerciseLevel};
use crate::model::research_paper::{FrameworkRelevance, ResearchCategory, ResearchPaper};
use crate::model::token::AipetFramework;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

pub fn sample_exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            title: "Creating Your First Color Token".to_string(),
            level: ExerciseLevel::Beginner,
            category: ExerciseCategory::Foundation,
            description: "Learn the basics of design tokens by creating a primary color token for your design system.".to_string(),
            instructions: "Define the color value, naming convention, and usage guidelines for a primary color token that can be used across your design system.".to_string(),
            expected_tokens: strings(&["color.primary.500", "color.primary.400", "color.primary.600"]),
            figma_template_url: "https://figma.com/template/color-tokens".to_string(),
            learning_objectives: strings(&[
                "Understand token naming conventions",
                "Learn color token structure",
                "Apply semantic naming principles",
            ]),
        },
        Exercise {
            title: "Building a Typography Scale".to_string(),
            level: ExerciseLevel::Intermediate,
            category: ExerciseCategory::Foundation,
            description: "Create a complete typography scale using design tokens that includes font sizes, line heights, and weights.".to_string(),
            instructions: "Build a modular typography system using mathematical ratios. Define tokens for headings, body text, and supporting text sizes.".to_string(),
            expected_tokens: strings(&[
                "typography.heading.xl",
                "typography.heading.lg",
                "typography.body.md",
                "typography.caption.sm",
            ]),
            figma_template_url: "https://figma.com/template/typography-tokens".to_string(),
            learning_objectives: strings(&[
                "Understand type scales",
                "Learn responsive typography",
                "Master hierarchical naming",
            ]),
        },
        Exercise {
            title: "AI Agency Design Tokens".to_string(),
            level: ExerciseLevel::Advanced,
            category: ExerciseCategory::AipetFramework,
            description: "Create design tokens that support user agency in AI interactions, including control states and feedback mechanisms.".to_string(),
            instructions: "Design tokens that enhance user control in AI systems. Focus on states like AI-processing, user-override-available, and confidence-levels.".to_string(),
            expected_tokens: strings(&[
                "ai.agency.control-available",
                "ai.agency.override-active",
                "ai.agency.user-preference",
            ]),
            figma_template_url: "https://figma.com/template/ai-agency-tokens".to_string(),
            learning_objectives: strings(&[
                "Apply AIPET principles",
                "Design for AI transparency",
                "Create behavioral tokens",
            ]),
        },
        Exercise {
            title: "Design System Workflow".to_string(),
            level: ExerciseLevel::Expert,
            category: ExerciseCategory::Workflow,
            description: "Establish a complete workflow for managing AI-enhanced design tokens from creation to implementation.".to_string(),
            instructions: "Create a workflow that includes token creation, validation, documentation, and distribution processes.".to_string(),
            expected_tokens: strings(&[
                "workflow.approval-state",
                "workflow.version-control",
                "workflow.sync-status",
            ]),
            figma_template_url: "https://figma.com/template/workflow-tokens".to_string(),
            learning_objectives: strings(&[
                "Manage token lifecycle",
                "Establish governance",
                "Automate workflows",
            ]),
        },
    ]
}

pub fn sample_research_papers() -> Vec<ResearchPaper> {
    vec![
        ResearchPaper {
            title: "Human-Centered AI: The Need for User Agency in AI-Assisted Decision Making".to_string(),
            authors: strings(&["Sarah Chen", "Michael Rodriguez", "Dr. Jennifer Kim"]),
            journal: "ACM Transactions on Computer-Human Interaction".to_string(),
            year: 2024,
            category: ResearchCategory::AgentiveUx,
            framework_relevance: FrameworkRelevance::Agency,
            summary: "Explores maintaining user agency in AI-assisted decision-making systems and how design tokens communicate levels of AI involvement and user control.".to_string(),
            key_insights: strings(&[
                "Users prefer graduated control over binary AI on/off switches",
                "Visual indicators of AI confidence improve user trust",
            ]),
            doi: "10.1145/3585088.3589123".to_string(),
            url: "https://dl.acm.org/doi/10.1145/3585088.3589123".to_string(),
        },
        ResearchPaper {
            title: "Privacy by Design in AI Systems: A Framework for Transparent Data Handling".to_string(),
            authors: strings(&["Dr. Elena Vasquez", "Thomas Wright", "Dr. Raj Patel"]),
            journal: "IEEE Security & Privacy".to_string(),
            year: 2023,
            category: ResearchCategory::TrustBuilding,
            framework_relevance: FrameworkRelevance::Privacy,
            summary: "Presents an approach to privacy-first design in AI systems, focusing on visual communication of data usage and consent.".to_string(),
            key_insights: strings(&[
                "Clear data flow visualization increases user understanding",
                "Real-time privacy indicators build long-term trust",
            ]),
            doi: "10.1109/MSEC.2023.3287654".to_string(),
            url: "https://ieeexplore.ieee.org/document/10234567".to_string(),
        },
        ResearchPaper {
            title: "Agentic AI in Creative Industries: Balancing Automation and Human Creativity".to_string(),
            authors: strings(&["Dr. Carlos Rodriguez", "Nina Petrov", "Dr. James Wilson"]),
            journal: "Creativity and Cognition".to_string(),
            year: 2024,
            category: ResearchCategory::AgenticAi,
            framework_relevance: FrameworkRelevance::MultiFramework,
            summary: "Examines agentic AI in creative workflows and how design tokens facilitate collaborative human-AI processes.".to_string(),
            key_insights: strings(&[
                "Co-creative interfaces require distinct interaction patterns",
                "Version control for AI-human iterations is crucial",
            ]),
            doi: "10.1080/10400419.2024.2312345".to_string(),
            url: "https://www.tandfonline.com/doi/full/10.1080/10400419.2024.2312345".to_string(),
        },
    ]
}

pub fn sample_case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            title: "Netflix AI-Powered Content Recommendations".to_string(),
            company: "Netflix".to_string(),
            challenge: "Users were overwhelmed by content choices and needed better personalization with transparency about AI recommendations.".to_string(),
            solution_approach: "AIPET-based design tokens for a transparent, controllable recommendation system.".to_string(),
            aipet_implementation: AipetImplementation {
                agency: "Users adjust recommendation preferences and opt out of specific AI features.".to_string(),
                interaction: "Natural language explanations for why a title was recommended.".to_string(),
                privacy: "Indicators showing which data influences recommendations.".to_string(),
                experience: "Recommendation categories that evolve with user behavior.".to_string(),
                trust: "Confidence indicators and clear handling of failed predictions.".to_string(),
            },
            results: CaseStudyResults {
                quantitative: strings(&[
                    "35% increase in content engagement",
                    "28% reduction in browsing time",
                ]),
                qualitative: strings(&[
                    "Users report feeling more in control of their viewing experience",
                    "Increased trust in AI recommendations due to transparency",
                ]),
            },
            tokens_created: strings(&[
                "ai.confidence.high",
                "ai.explanation.tooltip",
                "privacy.data-usage-indicator",
                "agency.opt-out-control",
            ]),
            lessons_learned: strings(&[
                "Users prefer graduated control over binary AI on/off switches",
                "Transparency features need to be optional to avoid overwhelming users",
            ]),
            complexity_level: ComplexityLevel::Advanced,
        },
        CaseStudy {
            title: "Spotify AI DJ and Personalized Playlists".to_string(),
            company: "Spotify".to_string(),
            challenge: "Creating an AI DJ experience that feels personal yet trustworthy while keeping users in control of discovery.".to_string(),
            solution_approach: "AIPET framework for AI-driven music curation with emphasis on agency and personalized experience.".to_string(),
            aipet_implementation: AipetImplementation {
                agency: "Users train the AI DJ by rating recommendations and setting mood preferences.".to_string(),
                interaction: "Conversational DJ persona with contextual music transitions.".to_string(),
                privacy: "Option to exclude songs or artists from AI analysis.".to_string(),
                experience: "Seamless transitions between AI and manual control.".to_string(),
                trust: "The DJ explains song choices and shows recommendation confidence.".to_string(),
            },
            results: CaseStudyResults {
                quantitative: strings(&[
                    "67% increase in AI DJ feature usage",
                    "23% more time spent listening",
                ]),
                qualitative: strings(&[
                    "High satisfaction with explanation features",
                    "Increased willingness to explore new music genres",
                ]),
            },
            tokens_created: strings(&[
                "ai.personality.dj-voice",
                "interaction.music-transition",
                "agency.preference-slider",
            ]),
            lessons_learned: strings(&[
                "Personality in AI interactions improves engagement",
                "Real-time feedback loops are crucial for AI training",
            ]),
            complexity_level: ComplexityLevel::Expert,
        },
    ]
}

pub fn sample_design_patterns() -> Vec<DesignPattern> {
    vec![
        DesignPattern {
            name: "Canvas Workflow".to_string(),
            pattern_type: PatternType::CanvasWorkflow,
            description: "Visual interface for creating and manipulating AI-generated content through direct manipulation and spatial organization.".to_string(),
            when_to_use: "Creative applications where users iterate on AI-generated content or combine AI assistance with manual editing.".to_string(),
            aipet_focus: AipetFramework::Agency,
            design_considerations: strings(&[
                "Distinguish AI-generated from user-created content",
                "Support undo/redo for both AI operations and manual edits",
            ]),
            token_examples: strings(&[
                "canvas.ai-generated-indicator",
                "canvas.generation-progress",
            ]),
            implementation_guide: "Start with a clear canvas metaphor, add visual feedback for AI operations, and make every AI operation undoable.".to_string(),
            case_studies: strings(&["Figma AI", "Adobe Firefly Canvas"]),
        },
        DesignPattern {
            name: "Voice Interface".to_string(),
            pattern_type: PatternType::VoiceInterface,
            description: "Natural language interaction through speech with contextual awareness.".to_string(),
            when_to_use: "Accessibility needs, hands-busy scenarios, or when conversation beats visual manipulation.".to_string(),
            aipet_focus: AipetFramework::Interaction,
            design_considerations: strings(&[
                "Provide visual feedback for speech recognition accuracy",
                "Handle interruptions and corrections gracefully",
            ]),
            token_examples: strings(&[
                "voice.listening-indicator",
                "voice.recognition-confidence",
            ]),
            implementation_guide: "Give audio and visual feedback for every voice state and offer fallbacks when recognition fails.".to_string(),
            case_studies: strings(&["Amazon Alexa Skills", "Google Assistant Actions"]),
        },
        DesignPattern {
            name: "Generative Interface".to_string(),
            pattern_type: PatternType::GenerativeInterface,
            description: "UI that generates content from user input with options for refinement and iteration.".to_string(),
            when_to_use: "Content creation tasks where users want multiple options quickly and refine through iteration.".to_string(),
            aipet_focus: AipetFramework::Experience,
            design_considerations: strings(&[
                "Show generation progress and estimated completion times",
                "Present multiple variations simultaneously for comparison",
            ]),
            token_examples: strings(&[
                "generation.progress-bar",
                "generation.variation-grid",
            ]),
            implementation_guide: "Design for rapid iteration with clear progress feedback and actionable recovery from failed generations.".to_string(),
            case_studies: strings(&["ChatGPT Interface", "GitHub Copilot Completions"]),
        },
    ]
}
