//! Instruction templates, one per capability.
//!
//! Field values are interpolated verbatim. The structured output shape is not
//! described here; the dispatcher sends the capability's JSON Schema with the
//! request, and the doc-comment descriptions on the contract fields travel
//! inside that schema.

use sforge_models::{
    AnalyzeCompetitorsInput, AnalyzeVideoInput, EnhanceAccessibilityInput, GenerateIdeasInput,
    GenerateScriptInput, OptimizeShortInput, PlanSeriesInput, RepurposeContentInput,
};

/// Video analysis instruction.
pub fn analyze_video(input: &AnalyzeVideoInput) -> String {
    format!(
        r#"Analyze this YouTube video and extract key information for creating engaging shorts:

1. CONTENT SUMMARY:
   - Provide a compelling 2-3 sentence summary of the main topic
   - Identify the video's niche/category (tech, lifestyle, education, etc.)
   - Extract the emotional tone (inspirational, educational, entertaining, etc.)

2. VIRAL MOMENTS IDENTIFICATION:
   - List 5-7 potential "hook" moments with timestamps that would work as shorts
   - For each moment, explain why it's engaging (surprising fact, emotional peak, visual appeal, etc.)
   - Rate each moment's viral potential (1-10)

3. KEY QUOTES & SOUNDBITES:
   - Extract 3-5 memorable quotes that could standalone
   - Identify any catchphrases or repeating themes
   - Note any background music or sound effects that enhance the moment

4. VISUAL HIGHLIGHTS:
   - Describe visually striking moments (animations, demonstrations, reactions)
   - Identify scenes with high visual variety
   - Note any text overlays or graphics already present

5. TARGET AUDIENCE:
   - Define the primary demographic (age, interests)
   - Suggest ideal short duration (15s, 30s, 60s)
   - Recommend posting time and hashtags

Video URL: {}

Please provide this analysis in structured JSON format."#,
        input.video_url
    )
}

/// Short script generation instruction.
pub fn generate_script(input: &GenerateScriptInput) -> String {
    format!(
        r#"Create an engaging YouTube Shorts script based on this video segment:

VIDEO CONTEXT:
- Original video URL: {}
- Selected timestamp: {} to {}
- Video category: {}
- Target duration: {} seconds

SCRIPT REQUIREMENTS:

1. HOOK (First 3 seconds):
   - Create an attention-grabbing opening line
   - Use curiosity gaps, bold statements, or questions
   - Make viewers want to keep watching

2. MAIN CONTENT:
   - Adapt the video segment for vertical format
   - Add context if needed for standalone viewing
   - Keep language punchy and concise
   - Include call-outs for key moments

3. VISUAL DIRECTIONS:
   - Suggest text overlays and their timing
   - Recommend zoom-ins or emphasis points
   - Note transitions between scenes
   - Suggest emoji or graphic placements

4. AUDIO NOTES:
   - Identify background music style (trending, upbeat, dramatic)
   - Note sound effect opportunities
   - Mark places for audio emphasis

5. CALL-TO-ACTION:
   - Create engaging end screen text
   - Suggest follow-up prompts
   - Include hook for next video

6. ENGAGEMENT ELEMENTS:
   - Add 2-3 questions in comments to drive engagement
   - Suggest controversial/discussion-worthy angles
   - Include shareability factors

OUTPUT FORMAT: Provide a second-by-second breakdown with all elements."#,
        input.video_url, input.start_time, input.end_time, input.category, input.duration
    )
}

/// Trend optimization instruction.
pub fn optimize_short(input: &OptimizeShortInput) -> String {
    format!(
        r#"Optimize this YouTube Short for maximum viral potential using current trends:

SHORT DETAILS:
{}

OPTIMIZATION TASKS:

1. TRENDING RESEARCH (Use Google Search grounding):
   - What are the top trending topics in {} right now?
   - What YouTube Shorts formats are currently viral?
   - What audio tracks are trending for shorts?
   - What hashtags are gaining traction in this niche?

2. TITLE OPTIMIZATION:
   - Create 5 attention-grabbing titles
   - Use trending keywords naturally
   - Include power words (shocking, secret, mistake, hack, etc.)
   - Optimize for YouTube search and recommendations

3. THUMBNAIL TEXT:
   - Suggest 3-5 words of bold text for thumbnail
   - Use high-contrast, readable fonts
   - Include emoji suggestions

4. DESCRIPTION OPTIMIZATION:
   - Write SEO-optimized description (first 100 chars crucial)
   - Include 15-20 relevant hashtags
   - Add timestamps if applicable
   - Include strategic keyword placement

5. POSTING STRATEGY:
   - Best time to post based on audience timezone
   - Cross-platform sharing strategy (TikTok, Instagram Reels)
   - Series potential (can this be part 1 of multiple shorts?)

6. COMPETITION ANALYSIS:
   - Compare with similar successful shorts
   - Identify gaps in current content
   - Suggest unique angles

Provide actionable recommendations with data-backed reasoning."#,
        input.short_details, input.category
    )
}

/// Multi-short series planning instruction.
pub fn plan_series(input: &PlanSeriesInput) -> String {
    format!(
        r#"Analyze this long-form video and create a strategic multi-short series plan:

VIDEO URL: {}
VIDEO DURATION: {}

SERIES PLANNING:

1. CONTENT BREAKDOWN:
   - Divide video into 5-10 shorts with natural flow
   - Create narrative arc across shorts (build anticipation)
   - Ensure each short can standalone but creates desire for next

2. HOOKS & CLIFFHANGERS:
   - Design compelling hooks for each short
   - Add cliffhangers to drive viewers to next video
   - Create callback references between shorts

3. PROGRESSIVE VALUE:
   - Structure information from basic to advanced
   - Tease advanced content in early shorts
   - Build on previous shorts' concepts

4. POSTING SCHEDULE:
   - Recommend optimal posting frequency
   - Suggest days/times for each short
   - Create urgency with limited-time angles

5. CROSS-PROMOTION:
   - Design end screens that promote next video
   - Create consistent visual branding
   - Build series identity (title format, intro style)

6. ENGAGEMENT STRATEGY:
   - Polls and questions across series
   - Community posts between shorts
   - Behind-the-scenes content ideas

Output should be a complete content calendar in JSON format."#,
        input.video_url, input.duration
    )
}

/// Competitor analysis instruction.
pub fn analyze_competitors(input: &AnalyzeCompetitorsInput) -> String {
    let mut competitor_list = String::new();
    for url in &input.competitor_urls {
        competitor_list.push_str("- ");
        competitor_list.push_str(url);
        competitor_list.push('\n');
    }

    format!(
        r#"Analyze competing content and provide strategic advantages:

COMPETITOR URLS:
{}
MY VIDEO:
{}

ANALYSIS REQUIREMENTS:

1. CONTENT GAPS:
   - What are competitors missing?
   - What angles are underexplored?
   - What questions are left unanswered?

2. PERFORMANCE METRICS:
   - Analyze video styles that perform best
   - Identify common elements in top performers
   - Note what differentiates viral content

3. UNIQUE POSITIONING:
   - How can we stand out?
   - What's our unique value proposition?
   - What format innovations can we try?

4. AUDIENCE INSIGHTS:
   - What do comments reveal about audience wants?
   - What complaints appear frequently?
   - What requests are unfulfilled?

5. IMPROVEMENT OPPORTUNITIES:
   - Better production quality tactics
   - More engaging editing techniques
   - Stronger hooks and storytelling

Provide actionable competitive advantages."#,
        competitor_list, input.my_video_url
    )
}

/// Content repurposing instruction. Includes a URL block only when a URL was
/// supplied and a text block only when raw text was supplied.
pub fn repurpose_content(input: &RepurposeContentInput) -> String {
    let mut source = String::new();
    if let Some(url) = input.content_url.as_deref().filter(|u| !u.is_empty()) {
        source.push_str("URL: ");
        source.push_str(url);
        source.push('\n');
    }
    if let Some(text) = input.content_text.as_deref().filter(|t| !t.is_empty()) {
        source.push_str("Text:\n");
        source.push_str(text);
        source.push('\n');
    }

    format!(
        r#"You are an expert content strategist specializing in repurposing long-form content for short-form video platforms like YouTube Shorts, TikTok, and Reels.

Your task is to analyze the following content and generate a list of compelling short video ideas.

Content Source:
{}
First, identify the key takeaways from the content.

Then, for each video idea, provide:
1.  **Title:** A viral-worthy title.
2.  **Format:** The best format for the video (e.g., "Talking Head with Text Overlay", "Quick Tutorial", "Listicle", "Myth Busting", "Story Time").
3.  **Hook:** A powerful opening for the first 3 seconds.
4.  **Content Angle:** The specific part of the original content to focus on.

Generate at least 3-5 distinct video ideas. Focus on creating value and sparking curiosity."#,
        source
    )
}

/// Idea brainstorming instruction.
pub fn generate_ideas(input: &GenerateIdeasInput) -> String {
    format!(
        r#"You are a world-class viral video producer and content strategist.
Your task is to brainstorm 5 unique, engaging, and high-potential YouTube Short ideas based on the provided criteria.

Topic: {}
Target Audience: {}
Video Style: {}

For each idea, provide the following:
1.  **Title:** A highly clickable and SEO-friendly title.
2.  **Concept:** A one or two-sentence summary of the video idea. It should be clear and compelling.
3.  **Hook:** A powerful opening line or visual concept for the first 3 seconds to maximize viewer retention.
4.  **Viral Potential (1-10):** Your expert assessment of its likelihood to go viral.
5.  **Suitability Score (1-10):** How well the idea fits the requested audience and style.

Think outside the box. Aim for ideas that are original, emotionally resonant, or provide exceptional value. Avoid generic or overdone concepts. Present the 5 ideas in a structured format."#,
        input.topic, input.target_audience, input.style
    )
}

/// Accessibility enhancement instruction.
pub fn enhance_accessibility(input: &EnhanceAccessibilityInput) -> String {
    format!(
        r#"Enhance this short for maximum reach through accessibility and localization:

SHORT CONTENT: {}

ENHANCEMENT TASKS:

1. CAPTION GENERATION:
   - Create accurate, properly timed captions
   - Add sound effect descriptions [music playing], [laughter]
   - Include speaker labels if multiple people

2. TRANSLATION OPTIMIZATION:
   - Identify key target languages based on content
   - Adapt jokes/references for cultural relevance
   - Suggest localized hashtags

3. VISUAL ACCESSIBILITY:
   - Ensure text contrast meets WCAG standards
   - Suggest alternative descriptions for visual elements
   - Recommend timing for text readability

4. INCLUSIVE LANGUAGE:
   - Review for potentially exclusive terminology
   - Suggest more inclusive alternatives
   - Ensure broad appeal across demographics

5. GLOBAL APPEAL:
   - Identify culturally universal elements
   - Suggest adaptations for international markets
   - Recommend region-specific posting strategies

Prioritize authenticity while maximizing reach."#,
        input.short_content
    )
}
