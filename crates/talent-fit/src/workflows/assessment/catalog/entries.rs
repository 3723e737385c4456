use std::borrow::Cow;

use super::{Archetype, ArchetypeEntry, KeyStrength};

const fn strength(title: &'static str, description: &'static str) -> KeyStrength {
    KeyStrength { title, description }
}

pub(super) fn standard_entries() -> Vec<(Archetype, ArchetypeEntry)> {
    vec![
        (
            Archetype::ResultsDynamo,
            ArchetypeEntry {
                name: Cow::Borrowed("Results Dynamo"),
                headline: Cow::Borrowed("Driven to deliver, energized by challenge"),
                summary: "A decisive self-starter who turns ambitious goals into measurable outcomes.",
                description: "You're at your best when the stakes are high and the path forward is unclear. You set a direction quickly, take ownership of the outcome, and push through obstacles that would stall others. Your bias for action keeps teams moving, and clear targets would help you channel that energy where it matters most.",
                style: "You work fast, focus on outcomes, and prefer autonomy over close supervision.",
                key_strengths: vec![
                    strength("Decisive Action", "You make confident calls with incomplete information and adjust as results come in."),
                    strength("Goal Orientation", "You break big objectives into milestones and relentlessly track progress against them."),
                    strength("Resilience Under Pressure", "You stay composed when deadlines tighten and keep others focused on what matters."),
                ],
                communication_style: "You communicate directly and briefly, leading with the bottom line and expecting the same in return.",
                decision_making_style: "You decide quickly, weigh impact over process, and are comfortable owning the consequences.",
                motivators: vec!["Clear, ambitious targets", "Authority to make decisions", "Visible wins and recognition", "Competitive challenges"],
                work_style_strengths: vec!["Fast execution", "Ownership", "Problem solving"],
                ideal_environment: "You thrive in fast-paced settings with clear goals, room for independent judgment, and leaders who reward results.",
                compatible_roles: vec!["Operations Manager", "Sales Director", "Project Lead", "Entrepreneur"],
            },
        ),
        (
            Archetype::InspiringConnector,
            ArchetypeEntry {
                name: Cow::Borrowed("Inspiring Connector"),
                headline: Cow::Borrowed("Energizing people and building momentum"),
                summary: "An enthusiastic communicator who rallies people around ideas and builds lasting relationships.",
                description: "You're the person who brings energy into the room. You build rapport quickly, read the mood of a group, and turn abstract plans into stories people want to be part of. Your optimism is contagious, and a team that values collaboration would make you feel at home.",
                style: "You work through people, favoring collaboration, brainstorming, and visible momentum.",
                key_strengths: vec![
                    strength("Relationship Building", "You connect with new people easily and keep networks active long after the first meeting."),
                    strength("Persuasion", "You frame ideas in ways that win support and help others see what is possible."),
                    strength("Team Energy", "You lift morale and keep spirits high during demanding stretches."),
                ],
                communication_style: "You communicate with warmth and enthusiasm, favoring conversation and storytelling over written detail.",
                decision_making_style: "You decide intuitively, drawing on conversations and the reactions of people around you.",
                motivators: vec!["Recognition and visibility", "Collaborative projects", "Variety and new people", "Freedom to share ideas"],
                work_style_strengths: vec!["Networking", "Presenting", "Motivating others"],
                ideal_environment: "You thrive in social, upbeat workplaces where ideas are shared openly and contributions are celebrated.",
                compatible_roles: vec!["Account Manager", "Community Manager", "Trainer", "Recruiter"],
            },
        ),
        (
            Archetype::SteadySupporter,
            ArchetypeEntry {
                name: Cow::Borrowed("Steady Supporter"),
                headline: Cow::Borrowed("Reliable, patient, and deeply loyal"),
                summary: "A dependable teammate who creates stability and helps others succeed.",
                description: "You're the calm center that teams rely on. You follow through on commitments, listen carefully, and make colleagues feel supported. You have a gift for creating consistency, and predictable routines would help you do your best work.",
                style: "You work at a steady, sustainable pace and value consistency and cooperation.",
                key_strengths: vec![
                    strength("Reliability", "You deliver on your promises and others trust you with work that cannot slip."),
                    strength("Active Listening", "You give people your full attention and understand what they actually need."),
                    strength("Patience", "You stay even-tempered through long projects and difficult conversations."),
                ],
                communication_style: "You communicate calmly and considerately, preferring one-on-one conversations and giving others room to speak.",
                decision_making_style: "You decide carefully, consult the people affected, and prefer proven approaches to sudden change.",
                motivators: vec!["Stable, secure environment", "Sincere appreciation", "Helping others succeed", "Clear expectations"],
                work_style_strengths: vec!["Consistency", "Cooperation", "Follow-through"],
                ideal_environment: "You thrive in supportive, harmonious teams with clear routines and time to adjust to change.",
                compatible_roles: vec!["Customer Success Specialist", "Human Resources Coordinator", "Operations Specialist", "Office Manager"],
            },
        ),
        (
            Archetype::PrecisionAnalyst,
            ArchetypeEntry {
                name: Cow::Borrowed("Precision Analyst"),
                headline: Cow::Borrowed("Accurate, thorough, and quality-focused"),
                summary: "A meticulous thinker who brings rigor, structure, and high standards to every task.",
                description: "You're driven by getting things right. You dig into details others skip, build systems that prevent mistakes, and ground your conclusions in evidence. You are at your best with clear standards, and access to good data would help you make the calls others find difficult.",
                style: "You work methodically, verify your assumptions, and hold yourself to exacting standards.",
                key_strengths: vec![
                    strength("Analytical Thinking", "You break complex problems into parts and reason carefully about each one."),
                    strength("Quality Control", "You catch errors early and raise the standard of everything you touch."),
                    strength("Systematic Planning", "You design processes that make outcomes repeatable and predictable."),
                ],
                communication_style: "You communicate precisely and in writing where possible, backing statements with facts and detail.",
                decision_making_style: "You decide after careful analysis, comparing options against clear criteria.",
                motivators: vec!["High quality standards", "Time to do things properly", "Logical, well-defined processes", "Expertise and mastery"],
                work_style_strengths: vec!["Accuracy", "Research", "Process design"],
                ideal_environment: "You thrive in structured environments with clear standards, quiet focus time, and respect for expertise.",
                compatible_roles: vec!["Data Analyst", "Quality Assurance Engineer", "Financial Analyst", "Compliance Specialist"],
            },
        ),
        (
            Archetype::AmbitiousInfluencer,
            ArchetypeEntry {
                name: Cow::Borrowed("Ambitious Influencer"),
                headline: Cow::Borrowed("Bold vision with the charisma to sell it"),
                summary: "A persuasive leader who sets bold goals and brings people along to reach them.",
                description: "You're a natural at turning ambition into shared momentum. You set stretching goals, then use your energy and presence to win people over. You have little patience for slow consensus, and a team that matches your pace would make you unstoppable.",
                style: "You work with urgency and visibility, pairing results focus with persuasive energy.",
                key_strengths: vec![
                    strength("Inspiring Leadership", "You paint a compelling picture of success and get people excited to pursue it."),
                    strength("Negotiation", "You read the room and push for outcomes that move your goals forward."),
                    strength("Initiative", "You launch new efforts without waiting for permission."),
                    strength("Confidence", "You project certainty that reassures stakeholders in uncertain moments."),
                ],
                communication_style: "You communicate with confidence and energy, pitching ideas boldly and inviting quick buy-in.",
                decision_making_style: "You decide quickly and trust your instincts, then rally support behind the call.",
                motivators: vec!["Influence and visibility", "Ambitious goals", "Winning as a team", "Freedom to lead"],
                work_style_strengths: vec!["Leading change", "Persuasion", "Driving growth"],
                ideal_environment: "You thrive in growth-oriented organizations that reward initiative and give you a stage to lead.",
                compatible_roles: vec!["Business Development Manager", "Sales Leader", "Startup Founder", "Marketing Director"],
            },
        ),
        (
            Archetype::PersuasiveMotivator,
            ArchetypeEntry {
                name: Cow::Borrowed("Persuasive Motivator"),
                headline: Cow::Borrowed("Rallying people toward results"),
                summary: "An energetic communicator who channels relationships into decisive progress.",
                description: "You're happiest when you can inspire a group and then see it deliver. People follow your enthusiasm, and you have the backbone to keep them pointed at the goal. Clear targets would help you turn that goodwill into measurable wins.",
                style: "You work through people first, then push firmly for outcomes.",
                key_strengths: vec![
                    strength("Motivating Others", "You keep teams energized and committed through demanding stretches."),
                    strength("Persuasive Communication", "You turn skeptics into supporters with compelling arguments."),
                    strength("Momentum Building", "You turn early enthusiasm into sustained delivery."),
                ],
                communication_style: "You communicate expressively and persuasively, mixing encouragement with clear asks.",
                decision_making_style: "You decide based on people and momentum, and commit quickly once support is in place.",
                motivators: vec!["Public recognition", "Leading teams", "Fast-moving challenges", "Social connection"],
                work_style_strengths: vec!["Team motivation", "Selling ideas", "Energetic execution"],
                ideal_environment: "You thrive in dynamic, people-centered teams with visible goals and plenty of interaction.",
                compatible_roles: vec!["Sales Manager", "Team Lead", "Public Relations Manager", "Event Director"],
            },
        ),
        (
            Archetype::SteadfastAchiever,
            ArchetypeEntry {
                name: Cow::Borrowed("Steadfast Achiever"),
                headline: Cow::Borrowed("Determined results with dependable follow-through"),
                summary: "A results-driven professional who pairs drive with patience and persistence.",
                description: "You're focused on results but never careless about how you get there. You set firm goals and then work steadily toward them, keeping commitments to the people around you. Your persistence means you finish what others abandon.",
                style: "You work toward clear goals at a steady, persistent pace.",
                key_strengths: vec![
                    strength("Persistence", "You keep going through setbacks until the objective is reached."),
                    strength("Dependable Leadership", "You give your team both direction and stability."),
                    strength("Practical Execution", "You turn plans into consistent, repeatable progress."),
                ],
                communication_style: "You communicate plainly and steadily, setting expectations and following up consistently.",
                decision_making_style: "You decide with conviction but check that your choices are sustainable for the team.",
                motivators: vec!["Tangible results", "Loyal teams", "Long-term goals", "Trust from leadership"],
                work_style_strengths: vec!["Follow-through", "Goal setting", "Steady leadership"],
                ideal_environment: "You thrive where long-term goals are clear and leadership values both performance and loyalty.",
                compatible_roles: vec!["Operations Manager", "Production Supervisor", "Program Manager", "Logistics Coordinator"],
            },
        ),
        (
            Archetype::DependableDriver,
            ArchetypeEntry {
                name: Cow::Borrowed("Dependable Driver"),
                headline: Cow::Borrowed("Quietly determined and always reliable"),
                summary: "A steady contributor with a firm inner drive to see things through.",
                description: "You're the teammate people count on to finish the job. You prefer stability and cooperation, yet you have a determined streak that surfaces when a goal matters. A clear mandate would make you a powerful force for steady progress.",
                style: "You work consistently, keep commitments, and step up firmly when it counts.",
                key_strengths: vec![
                    strength("Consistency", "You deliver reliable work week after week."),
                    strength("Quiet Determination", "You push through obstacles without drama."),
                    strength("Team Anchoring", "You keep the group grounded when priorities shift."),
                ],
                communication_style: "You communicate calmly and directly, speaking up firmly when something matters.",
                decision_making_style: "You decide carefully, then hold your position once you are convinced.",
                motivators: vec!["Security and stability", "Meaningful goals", "Respect for reliability", "Clear responsibilities"],
                work_style_strengths: vec!["Reliability", "Persistence", "Calm execution"],
                ideal_environment: "You thrive in stable teams with clear responsibilities and the occasional challenge to rise to.",
                compatible_roles: vec!["Project Coordinator", "Service Delivery Manager", "Field Supervisor", "Account Specialist"],
            },
        ),
        (
            Archetype::StrategicChallenger,
            ArchetypeEntry {
                name: Cow::Borrowed("Strategic Challenger"),
                headline: Cow::Borrowed("Ambition backed by rigorous thinking"),
                summary: "A results-focused strategist who questions assumptions and drives toward the best answer.",
                description: "You're both demanding and analytical. You set ambitious goals, then test every plan for weak points before committing. You have high standards for yourself and others, and hard problems would make you come alive.",
                style: "You work decisively but verify the logic behind every major move.",
                key_strengths: vec![
                    strength("Strategic Thinking", "You see the long game and align effort to it."),
                    strength("Critical Analysis", "You challenge assumptions and expose risks early."),
                    strength("High Standards", "You push for excellence in both outcome and execution."),
                ],
                communication_style: "You communicate directly and logically, expecting arguments to be backed by evidence.",
                decision_making_style: "You decide once the analysis supports a clear path, and then move quickly.",
                motivators: vec!["Complex challenges", "Autonomy", "Measurable impact", "Competence in others"],
                work_style_strengths: vec!["Strategy", "Risk assessment", "Driving results"],
                ideal_environment: "You thrive in demanding environments that reward sharp thinking and decisive execution.",
                compatible_roles: vec!["Strategy Consultant", "Engineering Manager", "Product Director", "Management Analyst"],
            },
        ),
        (
            Archetype::DecisiveArchitect,
            ArchetypeEntry {
                name: Cow::Borrowed("Decisive Architect"),
                headline: Cow::Borrowed("Precise systems, delivered with conviction"),
                summary: "A structured thinker who designs sound solutions and is willing to push them through.",
                description: "You're a builder of systems. You analyze carefully, design with precision, and then advocate firmly for the approach you believe in. Your blend of rigor and resolve would help you lead complex initiatives others find overwhelming.",
                style: "You work by designing the right structure first, then executing it firmly.",
                key_strengths: vec![
                    strength("Solution Design", "You create structures and plans that hold up under real-world pressure."),
                    strength("Principled Conviction", "You defend well-reasoned positions even under pushback."),
                    strength("Attention to Detail", "You see the small issues that decide large outcomes."),
                ],
                communication_style: "You communicate precisely and assertively, laying out your reasoning step by step.",
                decision_making_style: "You decide after thorough analysis and commit fully once the facts are clear.",
                motivators: vec!["Ownership of design", "Quality outcomes", "Intellectual challenge", "Efficient processes"],
                work_style_strengths: vec!["Architecture", "Planning", "Decisive execution"],
                ideal_environment: "You thrive where technical depth is valued and you have authority over how the work is structured.",
                compatible_roles: vec!["Solutions Architect", "Technical Lead", "Process Engineer", "Controller"],
            },
        ),
        (
            Archetype::SupportiveEncourager,
            ArchetypeEntry {
                name: Cow::Borrowed("Supportive Encourager"),
                headline: Cow::Borrowed("Warm energy that lifts the whole team"),
                summary: "A people-focused collaborator who combines enthusiasm with genuine care.",
                description: "You're the person colleagues go to for encouragement. You bring optimism to the team and back it up with patience and loyalty. You have a talent for making people feel valued, and a collaborative culture would help you flourish.",
                style: "You work collaboratively, building morale while keeping the team connected.",
                key_strengths: vec![
                    strength("Empathy", "You sense how people feel and respond with care."),
                    strength("Encouragement", "You help others believe they can succeed."),
                    strength("Collaboration", "You bring people together and smooth over friction."),
                ],
                communication_style: "You communicate warmly and positively, making sure everyone feels heard.",
                decision_making_style: "You decide with the group in mind, seeking options that keep people on board.",
                motivators: vec!["Positive relationships", "Helping others grow", "Team harmony", "Appreciation"],
                work_style_strengths: vec!["Coaching", "Team building", "Customer care"],
                ideal_environment: "You thrive in friendly, collaborative teams where people support each other.",
                compatible_roles: vec!["Team Coach", "Customer Experience Manager", "Learning and Development Specialist", "Counselor"],
            },
        ),
        (
            Archetype::HarmoniousCollaborator,
            ArchetypeEntry {
                name: Cow::Borrowed("Harmonious Collaborator"),
                headline: Cow::Borrowed("Building trust and keeping teams together"),
                summary: "A loyal, friendly teammate who strengthens relationships and keeps work flowing smoothly.",
                description: "You're a steadying presence with a friendly touch. You value harmony, build trust patiently, and bring warmth to everyday work. Clear shared goals would help you keep everyone moving in the same direction.",
                style: "You work cooperatively and consistently, prioritizing team cohesion.",
                key_strengths: vec![
                    strength("Trust Building", "You create relationships people rely on over the long term."),
                    strength("Diplomacy", "You resolve tension gently and keep conversations constructive."),
                    strength("Dependability", "You keep your commitments and help others keep theirs."),
                ],
                communication_style: "You communicate kindly and patiently, choosing words that keep relationships strong.",
                decision_making_style: "You decide by consensus where possible and avoid choices that divide the team.",
                motivators: vec!["Harmonious teams", "Stability", "Meaningful relationships", "Recognition for support"],
                work_style_strengths: vec!["Cooperation", "Mediation", "Consistency"],
                ideal_environment: "You thrive in cooperative, low-conflict environments with steady routines and friendly colleagues.",
                compatible_roles: vec!["Client Relations Specialist", "Human Resources Generalist", "Support Team Lead", "Administrative Coordinator"],
            },
        ),
        (
            Archetype::CreativeStrategist,
            ArchetypeEntry {
                name: Cow::Borrowed("Creative Strategist"),
                headline: Cow::Borrowed("Big ideas grounded in careful thinking"),
                summary: "An imaginative communicator who backs inspiration with structure.",
                description: "You're equally comfortable pitching a bold idea and working out how it would succeed. You bring enthusiasm to the room but you also check your reasoning. Time to refine ideas would make you especially persuasive.",
                style: "You work by exploring ideas with others, then shaping them into a sound plan.",
                key_strengths: vec![
                    strength("Creative Problem Solving", "You generate fresh options and test which ones hold up."),
                    strength("Compelling Presentation", "You explain complex ideas in engaging ways."),
                    strength("Balanced Judgment", "You weigh enthusiasm against evidence."),
                ],
                communication_style: "You communicate engagingly but with substance, pairing stories with supporting detail.",
                decision_making_style: "You decide after exploring options with others and checking them against the facts.",
                motivators: vec!["Creative freedom", "Intellectual exchange", "Recognition for ideas", "Quality results"],
                work_style_strengths: vec!["Ideation", "Presentation", "Structured creativity"],
                ideal_environment: "You thrive in innovative teams that value both imagination and rigor.",
                compatible_roles: vec!["Product Marketing Manager", "UX Researcher", "Content Strategist", "Brand Manager"],
            },
        ),
        (
            Archetype::InsightfulCommunicator,
            ArchetypeEntry {
                name: Cow::Borrowed("Insightful Communicator"),
                headline: Cow::Borrowed("Translating complexity into clarity"),
                summary: "An analytical thinker with a gift for explaining what the data means.",
                description: "You're a careful analyst who also enjoys sharing what you find. You dig for accuracy, then translate your insights so others can act on them. Your clarity would help you bridge technical and non-technical teams.",
                style: "You work precisely, then share your findings in approachable ways.",
                key_strengths: vec![
                    strength("Clear Explanation", "You make complex topics understandable for any audience."),
                    strength("Evidence-Based Thinking", "You ground your recommendations in facts."),
                    strength("Bridging Teams", "You connect specialists with the people who rely on their work."),
                ],
                communication_style: "You communicate clearly and accurately, adapting detail to your audience.",
                decision_making_style: "You decide on evidence, then explain your reasoning so others can follow it.",
                motivators: vec!["Accuracy", "Sharing knowledge", "Respected expertise", "Collaborative analysis"],
                work_style_strengths: vec!["Analysis", "Teaching", "Documentation"],
                ideal_environment: "You thrive where expertise is respected and communication across teams is encouraged.",
                compatible_roles: vec!["Business Analyst", "Technical Writer", "Research Consultant", "Data Storyteller"],
            },
        ),
        (
            Archetype::MethodicalCoordinator,
            ArchetypeEntry {
                name: Cow::Borrowed("Methodical Coordinator"),
                headline: Cow::Borrowed("Organized, careful, and consistently accurate"),
                summary: "A structured, dependable professional who keeps complex work on track.",
                description: "You're the organizer who makes sure nothing falls through the cracks. You combine patience with precision, building reliable processes and following them carefully. Well-defined responsibilities would help you deliver your best work every time.",
                style: "You work carefully and consistently, following proven processes.",
                key_strengths: vec![
                    strength("Organization", "You keep schedules, documents, and details under control."),
                    strength("Accuracy", "You produce work that rarely needs correcting."),
                    strength("Process Reliability", "You maintain routines that keep teams running smoothly."),
                ],
                communication_style: "You communicate in an orderly, considerate way, often preferring written follow-up.",
                decision_making_style: "You decide carefully, relying on established procedures and verified information.",
                motivators: vec!["Clear procedures", "Stability", "Quality work", "Time to prepare"],
                work_style_strengths: vec!["Coordination", "Documentation", "Process adherence"],
                ideal_environment: "You thrive in orderly environments with clear processes and realistic timelines.",
                compatible_roles: vec!["Project Coordinator", "Operations Analyst", "Executive Assistant", "Quality Specialist"],
            },
        ),
        (
            Archetype::VersatileAdapter,
            ArchetypeEntry {
                name: Cow::Borrowed("Versatile Adapter"),
                headline: Cow::Borrowed("Flexible, balanced, and ready for anything"),
                summary: "A well-rounded professional who adapts their approach to what each situation needs.",
                description: "You're comfortable in many roles because no single style dominates how you work. You can lead, support, analyze, or persuade depending on what the moment calls for. Your flexibility would make you a valuable bridge across different teams.",
                style: "You work flexibly, adjusting your pace and approach to the team and task at hand.",
                key_strengths: vec![
                    strength("Adaptability", "You adjust quickly to new people, tools, and priorities."),
                    strength("Balance", "You weigh results, relationships, stability, and quality evenly."),
                    strength("Versatility", "You contribute effectively across many kinds of work."),
                ],
                communication_style: "You communicate flexibly, matching your style to the person in front of you.",
                decision_making_style: "You decide pragmatically, blending intuition, input from others, and analysis.",
                motivators: vec!["Variety", "Learning opportunities", "Balanced workload", "Cross-team collaboration"],
                work_style_strengths: vec!["Flexibility", "Bridging perspectives", "Well-rounded execution"],
                ideal_environment: "You thrive in varied roles where you can switch between different kinds of work.",
                compatible_roles: vec!["Generalist Manager", "Project Manager", "Consultant", "Operations Associate"],
            },
        ),
    ]
}
